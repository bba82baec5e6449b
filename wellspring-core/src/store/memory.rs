//! In-memory store
//!
//! Implements all three store contracts over `Mutex`-guarded maps.
//! Primary test double; also usable as an embedded default for callers
//! without their own persistence.

use super::{ActivityStore, MessageStore, ProfileStore};
use crate::error::{Error, Result};
use crate::types::{Activity, Message, ProfilePatch, WellnessProfile};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Mutex;

/// Shared in-memory backing for messages, activities, and profiles.
#[derive(Default)]
pub struct MemoryStore {
    messages: Mutex<HashMap<String, Vec<Message>>>,
    /// user_id -> activities; activity ids are unique across users
    activities: Mutex<HashMap<String, Vec<Activity>>>,
    profiles: Mutex<HashMap<String, WellnessProfile>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to a user's history.
    pub fn record_message(&self, user_id: &str, message: Message) {
        self.messages
            .lock()
            .unwrap()
            .entry(user_id.to_string())
            .or_default()
            .push(message);
    }

    /// Register an activity for a user.
    pub fn add_activity(&self, user_id: &str, activity: Activity) {
        self.activities
            .lock()
            .unwrap()
            .entry(user_id.to_string())
            .or_default()
            .push(activity);
    }
}

impl MessageStore for MemoryStore {
    fn list_user_messages(&self, user_id: &str) -> Result<Vec<Message>> {
        Ok(self
            .messages
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }
}

impl ActivityStore for MemoryStore {
    fn list_user_activities(&self, user_id: &str) -> Result<Vec<Activity>> {
        Ok(self
            .activities
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    fn update_activity(
        &self,
        activity_id: &str,
        completed: bool,
        streak: u32,
        last_completed: Option<NaiveDate>,
    ) -> Result<()> {
        let mut activities = self.activities.lock().unwrap();
        for user_activities in activities.values_mut() {
            if let Some(activity) = user_activities.iter_mut().find(|a| a.id == activity_id) {
                activity.completed = completed;
                activity.streak = streak;
                activity.last_completed = last_completed;
                return Ok(());
            }
        }
        Err(Error::ActivityNotFound(activity_id.to_string()))
    }
}

impl ProfileStore for MemoryStore {
    fn get_profile(&self, user_id: &str) -> Result<Option<WellnessProfile>> {
        Ok(self.profiles.lock().unwrap().get(user_id).cloned())
    }

    fn create_profile(&self, profile: &WellnessProfile) -> Result<WellnessProfile> {
        self.profiles
            .lock()
            .unwrap()
            .insert(profile.user_id.clone(), profile.clone());
        Ok(profile.clone())
    }

    fn update_profile(&self, user_id: &str, patch: &ProfilePatch) -> Result<WellnessProfile> {
        let mut profiles = self.profiles.lock().unwrap();
        let existing = profiles
            .get(user_id)
            .ok_or_else(|| Error::ProfileNotFound(user_id.to_string()))?;
        let merged = existing.apply_patch(patch);
        profiles.insert(user_id.to_string(), merged.clone());
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_keep_insertion_order() {
        let store = MemoryStore::new();
        store.record_message("u-1", Message::from_user("first"));
        store.record_message("u-1", Message::from_assistant("second"));

        let messages = store.list_user_messages("u-1").unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text, "first");
    }

    #[test]
    fn test_unknown_user_has_empty_history() {
        let store = MemoryStore::new();
        assert!(store.list_user_messages("nobody").unwrap().is_empty());
        assert!(store.list_user_activities("nobody").unwrap().is_empty());
        assert!(store.get_profile("nobody").unwrap().is_none());
    }

    #[test]
    fn test_update_missing_activity_errors() {
        let store = MemoryStore::new();
        let result = store.update_activity("ghost", true, 1, None);
        assert!(matches!(result, Err(Error::ActivityNotFound(_))));
    }

    #[test]
    fn test_update_profile_requires_existing_record() {
        let store = MemoryStore::new();
        let patch = ProfilePatch::default();
        assert!(matches!(
            store.update_profile("u-1", &patch),
            Err(Error::ProfileNotFound(_))
        ));
    }

    #[test]
    fn test_create_then_update_round_trip() {
        let store = MemoryStore::new();
        let profile = WellnessProfile::default_for("u-1");
        store.create_profile(&profile).unwrap();

        let patch = ProfilePatch {
            wellness_score: Some(9),
            ..Default::default()
        };
        let updated = store.update_profile("u-1", &patch).unwrap();
        assert_eq!(updated.wellness_score, 9);
        assert_eq!(
            store.get_profile("u-1").unwrap().unwrap().wellness_score,
            9
        );
    }
}
