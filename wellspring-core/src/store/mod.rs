//! Collaborator store contracts
//!
//! The engine reads messages and activities and upserts profiles through
//! these traits; it does not own any persistence mechanics. Store calls
//! are expected to carry their own timeout/retry semantics — the engine
//! treats any error as a terminal, locally-recovered failure.

use crate::error::Result;
use crate::types::{Activity, Message, ProfilePatch, WellnessProfile};
use chrono::NaiveDate;
use std::sync::Arc;

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Read-only access to a user's recorded conversation history.
pub trait MessageStore {
    /// All messages for a user, oldest first.
    fn list_user_messages(&self, user_id: &str) -> Result<Vec<Message>>;
}

/// Access to a user's activity records.
pub trait ActivityStore {
    fn list_user_activities(&self, user_id: &str) -> Result<Vec<Activity>>;

    /// Write back the streak tracker's output for one activity.
    fn update_activity(
        &self,
        activity_id: &str,
        completed: bool,
        streak: u32,
        last_completed: Option<NaiveDate>,
    ) -> Result<()>;
}

/// Access to the per-user wellness profile.
pub trait ProfileStore {
    /// The stored profile, or `None` when the user has never been analyzed.
    fn get_profile(&self, user_id: &str) -> Result<Option<WellnessProfile>>;

    /// Persist a brand new profile, returning the stored record.
    fn create_profile(&self, profile: &WellnessProfile) -> Result<WellnessProfile>;

    /// Merge a partial patch over the stored profile, returning the result.
    fn update_profile(&self, user_id: &str, patch: &ProfilePatch) -> Result<WellnessProfile>;
}

// One shared store commonly backs all three contracts; `Arc` delegation
// lets a single instance fill every engine slot.

impl<T: MessageStore + ?Sized> MessageStore for Arc<T> {
    fn list_user_messages(&self, user_id: &str) -> Result<Vec<Message>> {
        (**self).list_user_messages(user_id)
    }
}

impl<T: ActivityStore + ?Sized> ActivityStore for Arc<T> {
    fn list_user_activities(&self, user_id: &str) -> Result<Vec<Activity>> {
        (**self).list_user_activities(user_id)
    }

    fn update_activity(
        &self,
        activity_id: &str,
        completed: bool,
        streak: u32,
        last_completed: Option<NaiveDate>,
    ) -> Result<()> {
        (**self).update_activity(activity_id, completed, streak, last_completed)
    }
}

impl<T: ProfileStore + ?Sized> ProfileStore for Arc<T> {
    fn get_profile(&self, user_id: &str) -> Result<Option<WellnessProfile>> {
        (**self).get_profile(user_id)
    }

    fn create_profile(&self, profile: &WellnessProfile) -> Result<WellnessProfile> {
        (**self).create_profile(profile)
    }

    fn update_profile(&self, user_id: &str, patch: &ProfilePatch) -> Result<WellnessProfile> {
        (**self).update_profile(user_id, patch)
    }
}
