//! Wellness score computation
//!
//! Converts sentiment counts into a 1-10 draft score, then folds in a
//! bounded activity contribution. The score is an integer in [1, 10] on
//! every path, including fallbacks.

use super::sentiment::SentimentScores;
use crate::types::Activity;

/// Total cap on the activity contribution.
const CONTRIBUTION_CAP: f64 = 3.0;

/// Draft wellness score from sentiment alone.
pub fn wellness_score(sentiment: &SentimentScores) -> u8 {
    let total = sentiment.total();
    if total > 0 {
        let ratio = f64::from(sentiment.positive) / f64::from(total);
        return ((ratio * 9.0 + 1.0).round() as i64).clamp(1, 10) as u8;
    }
    if sentiment.positive == 0 {
        // No signal at all: center-biased neutral default.
        return 5;
    }
    // Unreachable while total = positive + negative; covers score
    // structs built by hand with a zero total.
    (7 + sentiment.positive.min(3)).min(10) as u8
}

/// Bounded additive adjustment from activity completion behavior.
///
/// Four individually-capped terms, summed and capped again at 3.0.
/// No activities means no adjustment.
pub fn activity_contribution(activities: &[Activity]) -> f64 {
    if activities.is_empty() {
        return 0.0;
    }

    let completed: Vec<&Activity> = activities.iter().filter(|a| a.completed).collect();
    let completed_count = completed.len() as f64;

    let total_streak: f64 = activities.iter().map(|a| f64::from(a.streak)).sum();
    let highest_streak = activities
        .iter()
        .map(|a| f64::from(a.streak))
        .fold(0.0, f64::max);

    let mut unique_titles: Vec<&str> = completed.iter().map(|a| a.title.as_str()).collect();
    unique_titles.sort_unstable();
    unique_titles.dedup();
    let unique_completed = unique_titles.len() as f64;

    let contribution = (completed_count * 0.3).min(1.5)
        + (total_streak * 0.05).min(1.0)
        + (highest_streak * 0.1).min(0.5)
        + (unique_completed * 0.2).min(1.0);

    contribution.min(CONTRIBUTION_CAP)
}

/// Fold the activity contribution into the draft score, re-clamping to
/// [1, 10].
pub fn apply_contribution(draft: u8, contribution: f64) -> u8 {
    ((f64::from(draft) + contribution).round() as i64).clamp(1, 10) as u8
}
