//! Practice recommendation
//!
//! Maps detected issues (mood thresholds plus topic presence) to a
//! filtered, randomly-sampled subset of the static practice library.

use crate::lexicon::PRACTICE_LIBRARY;
use crate::types::RecommendedPractice;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Mood intensity above which an emotion registers as an issue.
const MOOD_THRESHOLD: f64 = 0.3;
/// At most this many practices are recommended.
const MAX_PRACTICES: usize = 3;

/// Select up to 3 practices for the detected mood trends and topics.
///
/// The "general" tag is always an issue, so an empty signal still yields
/// general-tagged practices.
pub fn select_practices<R: Rng>(
    mood_trends: &BTreeMap<String, f64>,
    topics: &[String],
    rng: &mut R,
) -> Vec<RecommendedPractice> {
    let issues = detect_issues(mood_trends, topics);

    let mut eligible: Vec<&'static crate::lexicon::PracticeTemplate> = PRACTICE_LIBRARY
        .iter()
        .filter(|practice| practice.tags.iter().any(|tag| issues.contains(tag)))
        .collect();

    eligible.shuffle(rng);
    eligible.truncate(MAX_PRACTICES);

    tracing::debug!(issues = ?issues, selected = eligible.len(), "Selected practices");

    eligible
        .into_iter()
        .map(|practice| RecommendedPractice {
            title: practice.title.to_string(),
            description: practice.description.to_string(),
            frequency: practice.frequency.to_string(),
        })
        .collect()
}

/// Issue tags implied by the mood map and topic list.
fn detect_issues(mood_trends: &BTreeMap<String, f64>, topics: &[String]) -> BTreeSet<&'static str> {
    let mut issues = BTreeSet::new();
    issues.insert("general");

    let over = |emotion: &str| mood_trends.get(emotion).is_some_and(|v| *v > MOOD_THRESHOLD);
    if over("anxious") {
        issues.insert("anxiety");
    }
    if over("sad") {
        issues.insert("depression");
    }
    if over("tired") {
        issues.insert("fatigue");
    }

    for topic in topics {
        if topic.contains("sleep") {
            issues.insert("sleep");
        }
        if topic.contains("stress") || topic.contains("work") {
            issues.insert("stress");
        }
        if topic.contains("anxiety") || topic.contains("anxious") {
            issues.insert("anxiety");
        }
        if topic.contains("social") || topic.contains("relationship") || topic.contains("lonel") {
            issues.insert("isolation");
        }
    }

    issues
}
