//! Profile merger / pipeline orchestrator
//!
//! Runs the full analysis in order — sentiment, draft score, emotions,
//! topics, classification, recommendations, activity contribution — and
//! resolves create-vs-update against the profile store. Callers always
//! get a usable [`WellnessProfile`]: upstream failures degrade to the
//! last-known profile or a hardcoded default, never an error.
//!
//! The draft-score/emotion-fallback dependency is handled as two
//! sequential passes: the sentiment-only draft score is computed first,
//! the emotion aggregator may consult it for its empty-map fallback,
//! and the activity contribution is applied last.

use super::{classify, emotions, recommend, score, sentiment, streaks, topics, user_corpus};
use crate::error::Result;
use crate::lexicon::DEFAULT_TOPICS;
use crate::store::{ActivityStore, MessageStore, ProfileStore};
use crate::types::{Activity, ProfilePatch, WellnessProfile};
use chrono::{NaiveDate, Utc};
use rand::Rng;

/// Default cap on how many recent messages feed one analysis run.
pub const DEFAULT_MAX_MESSAGES: usize = 500;

/// The wellness analysis engine, generic over its collaborator stores.
///
/// Holds no per-user state; lexicon tables are const data, so one engine
/// can serve concurrent invocations. Concurrent runs for the *same* user
/// race on the profile upsert with last-write-wins semantics — an
/// accepted limitation, not a guarantee this engine provides.
pub struct WellnessEngine<M, A, P> {
    messages: M,
    activities: A,
    profiles: P,
    max_messages: usize,
}

impl<M, A, P> WellnessEngine<M, A, P>
where
    M: MessageStore,
    A: ActivityStore,
    P: ProfileStore,
{
    pub fn new(messages: M, activities: A, profiles: P) -> Self {
        Self {
            messages,
            activities,
            profiles,
            max_messages: DEFAULT_MAX_MESSAGES,
        }
    }

    /// Cap the corpus to the most recent `max_messages` messages.
    pub fn with_max_messages(mut self, max_messages: usize) -> Self {
        self.max_messages = max_messages.max(1);
        self
    }

    /// Run the full pipeline and write the profile through the store.
    ///
    /// Infallible from the caller's view; see [`Self::analyze_with_rng`].
    pub fn analyze_and_update_profile(&self, user_id: &str) -> WellnessProfile {
        self.analyze_with_rng(user_id, &mut rand::thread_rng())
    }

    /// Full pipeline with injected randomness (template and practice
    /// selection). Tests pass a seeded RNG to pin down the output.
    pub fn analyze_with_rng<R: Rng>(&self, user_id: &str, rng: &mut R) -> WellnessProfile {
        let messages = match self.messages.list_user_messages(user_id) {
            Ok(messages) => messages,
            Err(e) => {
                tracing::error!(user_id, error = %e, "Message store read failed");
                return self.fallback_profile(user_id);
            }
        };
        let activities = match self.activities.list_user_activities(user_id) {
            Ok(activities) => activities,
            Err(e) => {
                tracing::error!(user_id, error = %e, "Activity store read failed");
                return self.fallback_profile(user_id);
            }
        };

        // No-data condition: not an error. Score stays at the neutral
        // default and every derived list is empty.
        if messages.is_empty() && activities.is_empty() {
            tracing::debug!(user_id, "No messages or activities; writing neutral profile");
            let patch = ProfilePatch {
                mood_trends: Some(Default::default()),
                common_topics: Some(Vec::new()),
                wellness_score: Some(5),
                strengths: Some(Vec::new()),
                areas_for_growth: Some(Vec::new()),
                recommended_practices: Some(Vec::new()),
                last_updated: Some(Utc::now()),
            };
            let neutral = WellnessProfile::default_for(user_id).apply_patch(&patch);
            return self.persist(neutral);
        }

        let recent = if messages.len() > self.max_messages {
            &messages[messages.len() - self.max_messages..]
        } else {
            &messages[..]
        };
        let corpus = user_corpus(recent);

        let sentiment = sentiment::score_corpus(&corpus);
        let draft = score::wellness_score(&sentiment);
        let mood_trends = emotions::aggregate_moods(&corpus, &sentiment, draft);

        let mut common_topics = topics::extract_topics(&corpus);
        if common_topics.is_empty() {
            common_topics = DEFAULT_TOPICS.iter().map(|s| s.to_string()).collect();
        }

        let classification = classify::classify_topics(&common_topics, recent, rng);
        let recommended = recommend::select_practices(&mood_trends, &common_topics, rng);

        let contribution = score::activity_contribution(&activities);
        let wellness_score = score::apply_contribution(draft, contribution);

        tracing::info!(
            user_id,
            wellness_score,
            draft,
            contribution,
            topics = common_topics.len(),
            "Analysis complete"
        );

        let profile = WellnessProfile {
            user_id: user_id.to_string(),
            mood_trends,
            common_topics,
            wellness_score,
            strengths: classification.strengths,
            areas_for_growth: classification.areas_for_growth,
            recommended_practices: recommended,
            last_updated: Utc::now(),
        };

        self.persist(profile)
    }

    /// Read the current profile without recomputation, creating a
    /// default one if absent.
    pub fn get_profile(&self, user_id: &str) -> WellnessProfile {
        match self.profiles.get_profile(user_id) {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                let profile = WellnessProfile::default_for(user_id);
                if let Err(e) = self.profiles.create_profile(&profile) {
                    tracing::warn!(user_id, error = %e, "Failed to persist default profile");
                }
                profile
            }
            Err(e) => {
                tracing::error!(user_id, error = %e, "Profile store read failed");
                WellnessProfile::default_for(user_id)
            }
        }
    }

    /// Record a completion for one activity and write it back.
    pub fn complete_activity(
        &self,
        user_id: &str,
        activity_id: &str,
        today: NaiveDate,
    ) -> Result<Activity> {
        let mut activity = self.find_activity(user_id, activity_id)?;
        streaks::mark_completed(&mut activity, today);
        self.write_activity(&activity)?;
        Ok(activity)
    }

    /// Toggle one activity's completion state and write it back.
    pub fn toggle_activity(
        &self,
        user_id: &str,
        activity_id: &str,
        today: NaiveDate,
    ) -> Result<Activity> {
        let mut activity = self.find_activity(user_id, activity_id)?;
        streaks::toggle_completion(&mut activity, today);
        self.write_activity(&activity)?;
        Ok(activity)
    }

    fn find_activity(&self, user_id: &str, activity_id: &str) -> Result<Activity> {
        self.activities
            .list_user_activities(user_id)?
            .into_iter()
            .find(|a| a.id == activity_id)
            .ok_or_else(|| crate::error::Error::ActivityNotFound(activity_id.to_string()))
    }

    fn write_activity(&self, activity: &Activity) -> Result<()> {
        self.activities.update_activity(
            &activity.id,
            activity.completed,
            activity.streak,
            activity.last_completed,
        )
    }

    /// Resolve create-vs-update for a freshly computed profile. Write
    /// failures are logged and swallowed; the computed profile is still
    /// returned to the caller.
    fn persist(&self, profile: WellnessProfile) -> WellnessProfile {
        match self.profiles.get_profile(&profile.user_id) {
            Ok(Some(_)) => {
                let patch = ProfilePatch::from(&profile);
                match self.profiles.update_profile(&profile.user_id, &patch) {
                    Ok(updated) => updated,
                    Err(e) => {
                        tracing::error!(user_id = %profile.user_id, error = %e, "Profile update failed");
                        profile
                    }
                }
            }
            Ok(None) => match self.profiles.create_profile(&profile) {
                Ok(created) => created,
                Err(e) => {
                    tracing::error!(user_id = %profile.user_id, error = %e, "Profile create failed");
                    profile
                }
            },
            Err(e) => {
                tracing::error!(user_id = %profile.user_id, error = %e, "Profile store read failed");
                profile
            }
        }
    }

    /// Last-known profile when the pipeline cannot run at all, or a
    /// hardcoded default when even that read fails.
    fn fallback_profile(&self, user_id: &str) -> WellnessProfile {
        match self.profiles.get_profile(user_id) {
            Ok(Some(profile)) => profile,
            _ => WellnessProfile::default_for(user_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::store::MemoryStore;
    use crate::types::Message;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    /// Store where every call fails, to exercise degraded paths.
    struct FailingStore;

    impl MessageStore for FailingStore {
        fn list_user_messages(&self, _user_id: &str) -> Result<Vec<Message>> {
            Err(Error::Store("message store unavailable".to_string()))
        }
    }

    impl ActivityStore for FailingStore {
        fn list_user_activities(&self, _user_id: &str) -> Result<Vec<Activity>> {
            Err(Error::Store("activity store unavailable".to_string()))
        }

        fn update_activity(
            &self,
            _activity_id: &str,
            _completed: bool,
            _streak: u32,
            _last_completed: Option<NaiveDate>,
        ) -> Result<()> {
            Err(Error::Store("activity store unavailable".to_string()))
        }
    }

    impl ProfileStore for FailingStore {
        fn get_profile(&self, _user_id: &str) -> Result<Option<WellnessProfile>> {
            Err(Error::Store("profile store unavailable".to_string()))
        }

        fn create_profile(&self, _profile: &WellnessProfile) -> Result<WellnessProfile> {
            Err(Error::Store("profile store unavailable".to_string()))
        }

        fn update_profile(
            &self,
            _user_id: &str,
            _patch: &ProfilePatch,
        ) -> Result<WellnessProfile> {
            Err(Error::Store("profile store unavailable".to_string()))
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    fn engine_with(
        store: Arc<MemoryStore>,
    ) -> WellnessEngine<Arc<MemoryStore>, Arc<MemoryStore>, Arc<MemoryStore>> {
        WellnessEngine::new(store.clone(), store.clone(), store)
    }

    #[test]
    fn test_pure_positive_corpus_scores_ten() {
        let store = Arc::new(MemoryStore::new());
        store.record_message("u-1", Message::from_user("I am happy today. I feel great."));
        let engine = engine_with(store);

        let profile = engine.analyze_with_rng("u-1", &mut rng());
        assert_eq!(profile.wellness_score, 10);
    }

    #[test]
    fn test_assistant_text_is_excluded() {
        let store = Arc::new(MemoryStore::new());
        store.record_message("u-1", Message::from_assistant("That is wonderful and amazing!"));
        store.record_message("u-1", Message::from_user("so stressed and exhausted"));
        let engine = engine_with(store);

        let profile = engine.analyze_with_rng("u-1", &mut rng());
        assert!(profile.wellness_score < 5);
    }

    #[test]
    fn test_empty_input_is_idempotent() {
        let store = Arc::new(MemoryStore::new());
        let engine = engine_with(store);

        let first = engine.analyze_with_rng("u-1", &mut rng());
        let second = engine.analyze_with_rng("u-1", &mut rng());

        for profile in [&first, &second] {
            assert_eq!(profile.wellness_score, 5);
            assert!(profile.mood_trends.is_empty());
            assert!(profile.common_topics.is_empty());
            assert!(profile.strengths.is_empty());
            assert!(profile.areas_for_growth.is_empty());
            assert!(profile.recommended_practices.is_empty());
        }
    }

    #[test]
    fn test_profile_shape_invariants() {
        let store = Arc::new(MemoryStore::new());
        store.record_message(
            "u-1",
            Message::from_user(
                "work is stressful, i can't sleep, i'm anxious about money and my family. \
                 let's talk about loneliness. i feel great about exercise though",
            ),
        );
        for i in 0..6 {
            store.add_activity(
                "u-1",
                Activity {
                    id: format!("act-{i}"),
                    title: format!("Habit {i}"),
                    completed: true,
                    streak: 12,
                    last_completed: None,
                },
            );
        }
        let engine = engine_with(store);
        let profile = engine.analyze_with_rng("u-1", &mut rng());

        assert!((1..=10).contains(&profile.wellness_score));
        assert!(profile.common_topics.len() <= 5);
        assert!(profile.recommended_practices.len() <= 3);
        assert!(profile.strengths.len() <= 3);
        assert!(profile.areas_for_growth.len() <= 3);
        for value in profile.mood_trends.values() {
            assert!((0.0..=1.0).contains(value));
        }
    }

    #[test]
    fn test_activities_lift_the_score() {
        let store = Arc::new(MemoryStore::new());
        store.record_message("u-1", Message::from_user("nothing much happened today here"));
        store.add_activity(
            "u-1",
            Activity {
                id: "act-1".to_string(),
                title: "Morning Walk".to_string(),
                completed: true,
                streak: 10,
                last_completed: None,
            },
        );
        let engine = engine_with(store);

        let profile = engine.analyze_with_rng("u-1", &mut rng());
        // Draft 5 + bounded contribution rounds up.
        assert!(profile.wellness_score > 5);
        assert!(profile.wellness_score <= 10);
    }

    #[test]
    fn test_topics_default_when_extraction_is_empty() {
        let store = Arc::new(MemoryStore::new());
        store.record_message("u-1", Message::from_user("ok."));
        let engine = engine_with(store);

        let profile = engine.analyze_with_rng("u-1", &mut rng());
        assert_eq!(
            profile.common_topics,
            vec!["mental wellness".to_string(), "self-care".to_string()]
        );
    }

    #[test]
    fn test_store_failure_degrades_to_default_profile() {
        let engine = WellnessEngine::new(FailingStore, FailingStore, FailingStore);

        let profile = engine.analyze_with_rng("u-1", &mut rng());
        assert_eq!(profile.wellness_score, 5);
        assert_eq!(profile.recommended_practices.len(), 1);
        assert_eq!(profile.recommended_practices[0].title, "Daily Mindfulness");

        let read = engine.get_profile("u-1");
        assert_eq!(read.wellness_score, 5);
    }

    #[test]
    fn test_message_failure_falls_back_to_last_known_profile() {
        let profiles = Arc::new(MemoryStore::new());
        let mut known = WellnessProfile::default_for("u-1");
        known.wellness_score = 8;
        profiles.create_profile(&known).unwrap();

        let engine = WellnessEngine::new(FailingStore, FailingStore, profiles);
        let profile = engine.analyze_with_rng("u-1", &mut rng());
        assert_eq!(profile.wellness_score, 8);
    }

    #[test]
    fn test_get_profile_creates_default_when_absent() {
        let store = Arc::new(MemoryStore::new());
        let engine = engine_with(store.clone());

        let profile = engine.get_profile("u-1");
        assert_eq!(profile.wellness_score, 5);
        assert!(store.get_profile("u-1").unwrap().is_some());
    }

    #[test]
    fn test_rerun_overwrites_previous_profile() {
        let store = Arc::new(MemoryStore::new());
        store.record_message("u-1", Message::from_user("i'm sad and hopeless and tired"));
        let engine = engine_with(store.clone());
        let low = engine.analyze_with_rng("u-1", &mut rng());
        assert!(low.wellness_score < 5);

        store.record_message("u-1", Message::from_user(
            "i am happy now. i feel great. doing well. wonderful amazing progress",
        ));
        let higher = engine.analyze_with_rng("u-1", &mut rng());
        assert!(higher.wellness_score > low.wellness_score);

        let stored = store.get_profile("u-1").unwrap().unwrap();
        assert_eq!(stored.wellness_score, higher.wellness_score);
    }

    #[test]
    fn test_complete_activity_writes_through() {
        let store = Arc::new(MemoryStore::new());
        store.add_activity(
            "u-1",
            Activity {
                id: "act-1".to_string(),
                title: "Journal".to_string(),
                completed: true,
                streak: 3,
                last_completed: NaiveDate::from_ymd_opt(2026, 3, 9),
            },
        );
        let engine = engine_with(store.clone());
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();

        let updated = engine.complete_activity("u-1", "act-1", today).unwrap();
        assert_eq!(updated.streak, 4);

        let stored = &store.list_user_activities("u-1").unwrap()[0];
        assert_eq!(stored.streak, 4);
        assert_eq!(stored.last_completed, Some(today));
    }

    #[test]
    fn test_toggle_activity_off() {
        let store = Arc::new(MemoryStore::new());
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        store.add_activity(
            "u-1",
            Activity {
                id: "act-1".to_string(),
                title: "Journal".to_string(),
                completed: true,
                streak: 3,
                last_completed: Some(today),
            },
        );
        let engine = engine_with(store.clone());

        let updated = engine.toggle_activity("u-1", "act-1", today).unwrap();
        assert!(!updated.completed);
        assert_eq!(updated.streak, 2);
        assert_eq!(updated.last_completed, None);
    }

    #[test]
    fn test_unknown_activity_errors() {
        let store = Arc::new(MemoryStore::new());
        let engine = engine_with(store);
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();

        assert!(matches!(
            engine.complete_activity("u-1", "ghost", today),
            Err(Error::ActivityNotFound(_))
        ));
    }
}
