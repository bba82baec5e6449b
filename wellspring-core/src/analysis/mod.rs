//! Lexical wellness analysis
//!
//! Pure, deterministic text scoring split into small passes: keyword
//! scanning primitives, sentiment scoring, topic extraction, emotion
//! aggregation, score blending, streak arithmetic, topic classification
//! and practice selection. [`engine`] wires them together over the
//! store contracts.
//!
//! Every pass works on a single lowercased corpus built from the user's
//! own messages; assistant turns never influence the analysis.

pub mod classify;
pub mod emotions;
pub mod engine;
pub mod recommend;
pub mod scan;
pub mod score;
pub mod sentiment;
pub mod streaks;
pub mod topics;

pub use engine::WellnessEngine;

use crate::types::{Message, Sender};

/// Concatenate the user's message texts into one lowercased corpus,
/// separated by single spaces. Assistant messages are skipped.
pub fn user_corpus(messages: &[Message]) -> String {
    messages
        .iter()
        .filter(|m| m.sender == Sender::User)
        .map(|m| m.text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}
