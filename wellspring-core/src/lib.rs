//! # wellspring-core
//!
//! Core library for wellspring - a user wellness analysis engine.
//!
//! This library provides:
//! - Domain types for messages, activities, and wellness profiles
//! - A deterministic lexical analysis pipeline (sentiment, topics,
//!   emotions, wellness scoring, streaks)
//! - Store contracts with in-memory and SQLite implementations
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Architecture
//!
//! The engine reads a user's conversation history and activity records
//! through store traits, runs a fixed pipeline of lexical passes over
//! the user's own messages, and upserts a derived `WellnessProfile`.
//! Analysis never fails from the caller's view: store errors degrade to
//! the last-known profile or a neutral default.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wellspring_core::{Config, SqliteStore, WellnessEngine};
//!
//! let config = Config::load().expect("failed to load config");
//! let store = Arc::new(SqliteStore::open(&Config::database_path()).expect("open db"));
//! store.migrate().expect("failed to run migrations");
//!
//! let engine = WellnessEngine::new(store.clone(), store.clone(), store)
//!     .with_max_messages(config.analysis.max_messages);
//! let profile = engine.analyze_and_update_profile("user-1");
//! println!("wellness score: {}", profile.wellness_score);
//! ```

// Re-export commonly used items at the crate root
pub use analysis::WellnessEngine;
pub use config::Config;
pub use error::{Error, Result};
pub use store::{ActivityStore, MemoryStore, MessageStore, ProfileStore, SqliteStore};
pub use types::*;

// Public modules
pub mod analysis;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod logging;
pub mod store;
pub mod types;
