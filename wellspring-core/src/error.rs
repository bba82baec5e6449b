//! Error types for wellspring-core

use thiserror::Error;

/// Main error type for the wellspring-core library
#[derive(Error, Debug)]
pub enum Error {
    /// Database error
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Collaborator store error (message, activity, or profile store)
    #[error("store error: {0}")]
    Store(String),

    /// Profile not found
    #[error("profile not found for user: {0}")]
    ProfileNotFound(String),

    /// Activity not found
    #[error("activity not found: {0}")]
    ActivityNotFound(String),
}

/// Result type alias for wellspring-core
pub type Result<T> = std::result::Result<T, Error>;
