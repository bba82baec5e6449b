//! Activity streak tracking
//!
//! Day-granularity continuity rules, identical for every activity kind.
//! "Today" is always caller-supplied so the transitions stay testable.
//!
//! The state machine branches on `last_completed`:
//! - today: already done; completing again is a no-op, toggling off
//!   decrements the streak (floored at 0) and clears the date
//! - yesterday: streak continues, +1
//! - none: first completion, streak starts at 1
//! - anything else: streak broken, reset to 1

use crate::types::Activity;
use chrono::{Duration, NaiveDate};

/// Record a completion for `today`. Idempotent: completing an activity
/// already done today changes nothing.
pub fn mark_completed(activity: &mut Activity, today: NaiveDate) {
    let yesterday = today - Duration::days(1);

    match activity.last_completed {
        Some(date) if date == today => {}
        Some(date) if date == yesterday => {
            activity.streak += 1;
            activity.completed = true;
            activity.last_completed = Some(today);
        }
        None => {
            activity.streak = 1;
            activity.completed = true;
            activity.last_completed = Some(today);
        }
        Some(_) => {
            // Continuity broken; start over.
            activity.streak = 1;
            activity.completed = true;
            activity.last_completed = Some(today);
        }
    }
}

/// Toggle an activity's completion state for `today`. Returns the new
/// completed state.
///
/// Toggling off an activity completed today walks the streak back by
/// one (floored at zero) and clears `last_completed`; any other state
/// behaves like [`mark_completed`].
pub fn toggle_completion(activity: &mut Activity, today: NaiveDate) -> bool {
    if activity.last_completed == Some(today) {
        activity.streak = activity.streak.saturating_sub(1);
        activity.completed = false;
        activity.last_completed = None;
        return false;
    }
    mark_completed(activity, today);
    activity.completed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn activity(streak: u32, last_completed: Option<NaiveDate>) -> Activity {
        Activity {
            id: "act-1".to_string(),
            title: "Morning Walk".to_string(),
            completed: last_completed.is_some(),
            streak,
            last_completed,
        }
    }

    #[test]
    fn test_consecutive_day_increments_streak() {
        let today = day(2026, 3, 10);
        let mut act = activity(3, Some(day(2026, 3, 9)));

        mark_completed(&mut act, today);

        assert_eq!(act.streak, 4);
        assert!(act.completed);
        assert_eq!(act.last_completed, Some(today));
    }

    #[test]
    fn test_first_completion_starts_streak() {
        let today = day(2026, 3, 10);
        let mut act = activity(0, None);

        mark_completed(&mut act, today);

        assert_eq!(act.streak, 1);
        assert!(act.completed);
    }

    #[test]
    fn test_gap_resets_streak() {
        let today = day(2026, 3, 10);
        let mut act = activity(7, Some(day(2026, 3, 5)));

        mark_completed(&mut act, today);

        assert_eq!(act.streak, 1);
        assert!(act.completed);
        assert_eq!(act.last_completed, Some(today));
    }

    #[test]
    fn test_completing_twice_is_idempotent() {
        let today = day(2026, 3, 10);
        let mut act = activity(3, Some(day(2026, 3, 9)));

        mark_completed(&mut act, today);
        let snapshot = act.clone();
        mark_completed(&mut act, today);

        assert_eq!(act.streak, snapshot.streak);
        assert_eq!(act.last_completed, snapshot.last_completed);
    }

    #[test]
    fn test_toggle_off_decrements_streak() {
        let today = day(2026, 3, 10);
        let mut act = activity(4, Some(today));

        let completed = toggle_completion(&mut act, today);

        assert!(!completed);
        assert_eq!(act.streak, 3);
        assert!(!act.completed);
        assert_eq!(act.last_completed, None);
    }

    #[test]
    fn test_toggle_off_floors_at_zero() {
        let today = day(2026, 3, 10);
        let mut act = activity(0, Some(today));

        toggle_completion(&mut act, today);

        assert_eq!(act.streak, 0);
    }

    #[test]
    fn test_toggle_on_behaves_like_completion() {
        let today = day(2026, 3, 10);
        let mut act = activity(2, Some(day(2026, 3, 9)));

        let completed = toggle_completion(&mut act, today);

        assert!(completed);
        assert_eq!(act.streak, 3);
    }
}
