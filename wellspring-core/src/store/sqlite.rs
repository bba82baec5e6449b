//! SQLite-backed store
//!
//! A single-connection handle implementing all three store contracts,
//! with embedded migrations managed via `PRAGMA user_version`. Profile
//! list/map fields are stored as JSON columns.

use super::{ActivityStore, MessageStore, ProfileStore};
use crate::error::{Error, Result};
use crate::types::{Activity, Message, ProfilePatch, Sender, WellnessProfile};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;

/// Current schema version
const SCHEMA_VERSION: i32 = 1;

/// SQL migrations, indexed by version number
const MIGRATIONS: &[&str] = &[
    // Version 1: initial schema
    r#"
    CREATE TABLE IF NOT EXISTS messages (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id     TEXT NOT NULL,
        sender      TEXT NOT NULL,
        text        TEXT NOT NULL,
        ts          DATETIME
    );
    CREATE INDEX IF NOT EXISTS idx_messages_user ON messages(user_id, id);

    CREATE TABLE IF NOT EXISTS activities (
        id             TEXT PRIMARY KEY,
        user_id        TEXT NOT NULL,
        title          TEXT NOT NULL,
        completed      INTEGER NOT NULL DEFAULT 0,
        streak         INTEGER NOT NULL DEFAULT 0,
        last_completed TEXT,
        UNIQUE(user_id, title)
    );

    CREATE TABLE IF NOT EXISTS profiles (
        user_id               TEXT PRIMARY KEY,
        mood_trends           JSON NOT NULL,
        common_topics         JSON NOT NULL,
        wellness_score        INTEGER NOT NULL,
        strengths             JSON NOT NULL,
        areas_for_growth      JSON NOT NULL,
        recommended_practices JSON NOT NULL,
        last_updated          DATETIME NOT NULL
    );
    "#,
];

/// Database handle (single connection behind a mutex)
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open or create a database at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "
            PRAGMA foreign_keys = ON;
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            ",
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run schema migrations.
    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        let current: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

        for version in current..SCHEMA_VERSION {
            conn.execute_batch(MIGRATIONS[version as usize])?;
            conn.pragma_update(None, "user_version", version + 1)?;
            tracing::info!(version = version + 1, "Applied schema migration");
        }

        Ok(())
    }

    /// Append a message to a user's history.
    pub fn insert_message(&self, user_id: &str, message: &Message) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO messages (user_id, sender, text, ts) VALUES (?1, ?2, ?3, ?4)",
            params![
                user_id,
                message.sender.as_str(),
                message.text,
                message.timestamp.map(|t| t.to_rfc3339()),
            ],
        )?;
        Ok(())
    }

    /// Insert or replace an activity record.
    pub fn upsert_activity(&self, user_id: &str, activity: &Activity) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT OR REPLACE INTO activities (id, user_id, title, completed, streak, last_completed)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                activity.id,
                user_id,
                activity.title,
                activity.completed,
                activity.streak,
                activity.last_completed.map(|d| d.to_string()),
            ],
        )?;
        Ok(())
    }

    fn row_to_activity(row: &Row) -> rusqlite::Result<Activity> {
        // Malformed persisted streaks (non-numeric, negative) coerce to 0.
        let streak = row
            .get::<_, i64>("streak")
            .unwrap_or(0)
            .max(0) as u32;
        let last_completed: Option<String> = row.get("last_completed")?;

        Ok(Activity {
            id: row.get("id")?,
            title: row.get("title")?,
            completed: row.get("completed")?,
            streak,
            last_completed: last_completed
                .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()),
        })
    }

    fn row_to_profile(row: &Row) -> rusqlite::Result<WellnessProfile> {
        let mood_trends: String = row.get("mood_trends")?;
        let common_topics: String = row.get("common_topics")?;
        let strengths: String = row.get("strengths")?;
        let areas_for_growth: String = row.get("areas_for_growth")?;
        let recommended_practices: String = row.get("recommended_practices")?;
        let last_updated: String = row.get("last_updated")?;

        Ok(WellnessProfile {
            user_id: row.get("user_id")?,
            mood_trends: serde_json::from_str(&mood_trends).unwrap_or_default(),
            common_topics: serde_json::from_str(&common_topics).unwrap_or_default(),
            wellness_score: row.get::<_, i64>("wellness_score").unwrap_or(5).clamp(1, 10) as u8,
            strengths: serde_json::from_str(&strengths).unwrap_or_default(),
            areas_for_growth: serde_json::from_str(&areas_for_growth).unwrap_or_default(),
            recommended_practices: serde_json::from_str(&recommended_practices)
                .unwrap_or_default(),
            last_updated: DateTime::parse_from_rfc3339(&last_updated)
                .map(|t| t.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        })
    }

    fn write_profile(conn: &Connection, profile: &WellnessProfile) -> Result<()> {
        conn.execute(
            "INSERT OR REPLACE INTO profiles
             (user_id, mood_trends, common_topics, wellness_score, strengths,
              areas_for_growth, recommended_practices, last_updated)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                profile.user_id,
                serde_json::to_string(&profile.mood_trends)?,
                serde_json::to_string(&profile.common_topics)?,
                profile.wellness_score,
                serde_json::to_string(&profile.strengths)?,
                serde_json::to_string(&profile.areas_for_growth)?,
                serde_json::to_string(&profile.recommended_practices)?,
                profile.last_updated.to_rfc3339(),
            ],
        )?;
        Ok(())
    }
}

impl MessageStore for SqliteStore {
    fn list_user_messages(&self, user_id: &str) -> Result<Vec<Message>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT sender, text, ts FROM messages WHERE user_id = ?1 ORDER BY id ASC",
        )?;

        let rows = stmt.query_map(params![user_id], |row| {
            let sender: String = row.get("sender")?;
            let ts: Option<String> = row.get("ts")?;
            Ok(Message {
                sender: Sender::from_str(&sender).unwrap_or(Sender::User),
                text: row.get("text")?,
                timestamp: ts.and_then(|s| {
                    DateTime::parse_from_rfc3339(&s)
                        .map(|t| t.with_timezone(&Utc))
                        .ok()
                }),
            })
        })?;

        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Error::from)
    }
}

impl ActivityStore for SqliteStore {
    fn list_user_activities(&self, user_id: &str) -> Result<Vec<Activity>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, title, completed, streak, last_completed
             FROM activities WHERE user_id = ?1 ORDER BY title ASC",
        )?;

        let rows = stmt.query_map(params![user_id], Self::row_to_activity)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Error::from)
    }

    fn update_activity(
        &self,
        activity_id: &str,
        completed: bool,
        streak: u32,
        last_completed: Option<NaiveDate>,
    ) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        let changed = conn.execute(
            "UPDATE activities SET completed = ?2, streak = ?3, last_completed = ?4
             WHERE id = ?1",
            params![
                activity_id,
                completed,
                streak,
                last_completed.map(|d| d.to_string()),
            ],
        )?;

        if changed == 0 {
            return Err(Error::ActivityNotFound(activity_id.to_string()));
        }
        Ok(())
    }
}

impl ProfileStore for SqliteStore {
    fn get_profile(&self, user_id: &str) -> Result<Option<WellnessProfile>> {
        let conn = self.conn.lock().unwrap();
        conn.query_row(
            "SELECT user_id, mood_trends, common_topics, wellness_score, strengths,
                    areas_for_growth, recommended_practices, last_updated
             FROM profiles WHERE user_id = ?1",
            params![user_id],
            Self::row_to_profile,
        )
        .optional()
        .map_err(Error::from)
    }

    fn create_profile(&self, profile: &WellnessProfile) -> Result<WellnessProfile> {
        let conn = self.conn.lock().unwrap();
        Self::write_profile(&conn, profile)?;
        Ok(profile.clone())
    }

    fn update_profile(&self, user_id: &str, patch: &ProfilePatch) -> Result<WellnessProfile> {
        let conn = self.conn.lock().unwrap();
        let existing = conn
            .query_row(
                "SELECT user_id, mood_trends, common_topics, wellness_score, strengths,
                        areas_for_growth, recommended_practices, last_updated
                 FROM profiles WHERE user_id = ?1",
                params![user_id],
                Self::row_to_profile,
            )
            .optional()?
            .ok_or_else(|| Error::ProfileNotFound(user_id.to_string()))?;

        let merged = existing.apply_patch(patch);
        Self::write_profile(&conn, &merged)?;
        Ok(merged)
    }
}
