//! Core domain types for wellspring
//!
//! These types form the data model shared between the analysis engine
//! and the collaborator stores.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Message** | One recorded chat message; only `user`-authored text feeds the engine |
//! | **Activity** | A named wellness activity with a day-granularity completion streak |
//! | **Wellness score** | Integer 1–10 blending text sentiment with activity consistency |
//! | **Mood trend** | Normalized 0–1 intensity of a named emotion detected in text |
//! | **Practice** | A template from the static practice library, tagged by the issues it addresses |

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================
// Messages
// ============================================

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    /// Identifier used in database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Assistant => "assistant",
        }
    }
}

impl std::str::FromStr for Sender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Sender::User),
            "assistant" => Ok(Sender::Assistant),
            _ => Err(format!("unknown sender: {}", s)),
        }
    }
}

/// One recorded chat message. Immutable once stored; the engine only reads
/// user-authored text out of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Who wrote the message
    pub sender: Sender,
    /// Raw message text
    pub text: String,
    /// When the message was recorded, if known
    pub timestamp: Option<DateTime<Utc>>,
}

impl Message {
    /// Convenience constructor for a user-authored message.
    pub fn from_user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            timestamp: None,
        }
    }

    /// Convenience constructor for an assistant-authored message.
    pub fn from_assistant(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            text: text.into(),
            timestamp: None,
        }
    }
}

// ============================================
// Activities
// ============================================

/// A wellness activity with its completion streak.
///
/// Owned by the caller's activity store; the streak tracker mutates
/// `completed`, `streak`, and `last_completed` through the 4-way
/// day-continuity state machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Store-assigned identifier
    pub id: String,
    /// Display title, unique per user
    pub title: String,
    /// Whether the activity is completed for the current day
    pub completed: bool,
    /// Consecutive-day completion count
    pub streak: u32,
    /// Date of the most recent completion
    pub last_completed: Option<NaiveDate>,
}

// ============================================
// Profiles
// ============================================

/// A wellness practice recommended to the user.
///
/// Derived from the static practice library; issue tags are dropped
/// from the output shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedPractice {
    pub title: String,
    pub description: String,
    pub frequency: String,
}

/// The periodic wellness profile produced by the engine.
///
/// One profile per user. Each analysis run fully overwrites the derived
/// fields; no history is retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellnessProfile {
    /// User this profile belongs to
    pub user_id: String,
    /// Emotion name -> intensity, every value in [0, 1]
    pub mood_trends: BTreeMap<String, f64>,
    /// Up to 5 topics, ordered by descending frequency
    pub common_topics: Vec<String>,
    /// Integer in [1, 10] on every computation path
    pub wellness_score: u8,
    /// Positive-associated observations, up to 3
    pub strengths: Vec<String>,
    /// Negative-associated observations, up to 3
    pub areas_for_growth: Vec<String>,
    /// Up to 3 practices drawn from the practice library
    pub recommended_practices: Vec<RecommendedPractice>,
    /// When this profile was last written
    pub last_updated: DateTime<Utc>,
}

impl WellnessProfile {
    /// A safe default profile: neutral score, empty derived lists, one
    /// general mindfulness recommendation. Used when a user has no prior
    /// profile or when a store failure degrades the pipeline.
    pub fn default_for(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            mood_trends: BTreeMap::new(),
            common_topics: Vec::new(),
            wellness_score: 5,
            strengths: Vec::new(),
            areas_for_growth: Vec::new(),
            recommended_practices: vec![RecommendedPractice {
                title: "Daily Mindfulness".to_string(),
                description: "Spend 5 minutes focusing on your breath.".to_string(),
                frequency: "daily".to_string(),
            }],
            last_updated: Utc::now(),
        }
    }

    /// Apply a partial patch, producing a new profile.
    ///
    /// Fields absent from the patch keep their existing values. This is
    /// the merge half of the create-vs-update resolution: the engine
    /// builds a patch from whatever it managed to compute and merges it
    /// over the stored profile.
    pub fn apply_patch(&self, patch: &ProfilePatch) -> Self {
        Self {
            user_id: self.user_id.clone(),
            mood_trends: patch
                .mood_trends
                .clone()
                .unwrap_or_else(|| self.mood_trends.clone()),
            common_topics: patch
                .common_topics
                .clone()
                .unwrap_or_else(|| self.common_topics.clone()),
            wellness_score: patch.wellness_score.unwrap_or(self.wellness_score),
            strengths: patch
                .strengths
                .clone()
                .unwrap_or_else(|| self.strengths.clone()),
            areas_for_growth: patch
                .areas_for_growth
                .clone()
                .unwrap_or_else(|| self.areas_for_growth.clone()),
            recommended_practices: patch
                .recommended_practices
                .clone()
                .unwrap_or_else(|| self.recommended_practices.clone()),
            last_updated: patch.last_updated.unwrap_or(self.last_updated),
        }
    }
}

/// Partial profile update.
///
/// `None` fields are left untouched by [`WellnessProfile::apply_patch`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub mood_trends: Option<BTreeMap<String, f64>>,
    pub common_topics: Option<Vec<String>>,
    pub wellness_score: Option<u8>,
    pub strengths: Option<Vec<String>>,
    pub areas_for_growth: Option<Vec<String>>,
    pub recommended_practices: Option<Vec<RecommendedPractice>>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl From<&WellnessProfile> for ProfilePatch {
    /// A full patch carrying every derived field of the profile.
    fn from(profile: &WellnessProfile) -> Self {
        Self {
            mood_trends: Some(profile.mood_trends.clone()),
            common_topics: Some(profile.common_topics.clone()),
            wellness_score: Some(profile.wellness_score),
            strengths: Some(profile.strengths.clone()),
            areas_for_growth: Some(profile.areas_for_growth.clone()),
            recommended_practices: Some(profile.recommended_practices.clone()),
            last_updated: Some(profile.last_updated),
        }
    }
}
