//! Spaced repetition scheduling
//!
//! A three-tier interval curve driven by typed answers:
//! - first correct answer: review again in 1 day
//! - second consecutive correct answer: 6 days
//! - later correct answers: previous interval * 2.5, rounded
//!
//! Any incorrect answer is a lapse and restarts the curve.

use chrono::{DateTime, Duration, Utc};

use super::models::{Card, GradeOutcome};

/// Growth factor applied from the third consecutive correct answer on
const INTERVAL_MULTIPLIER: f64 = 2.5;

/// Interval after the second consecutive correct answer
const SECOND_INTERVAL: u32 = 6;

/// Normalize an answer for comparison
fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Check a typed answer against the card's back.
///
/// Surrounding whitespace and letter case are ignored. Anything else must
/// match exactly, so an empty answer is never correct for a non-empty back.
pub fn is_correct_answer(card: &Card, raw_answer: &str) -> bool {
    normalize(raw_answer) == normalize(&card.back)
}

/// Interval in days for a correct answer, given the repetition count
/// *after* that answer and the interval the card had before it.
pub fn next_interval(repetitions: u32, previous_interval: u32) -> u32 {
    let interval = match repetitions {
        0 | 1 => 1,
        2 => SECOND_INTERVAL,
        // `as` saturates on overflow
        _ => (previous_interval as f64 * INTERVAL_MULTIPLIER).round() as u32,
    };
    interval.max(1)
}

/// `now` plus a number of whole days, saturating at the latest
/// representable instant.
pub fn due_after(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    now.checked_add_signed(Duration::days(i64::from(days)))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Grade an answer and compute the card's next scheduling state.
///
/// Returns a new card; `id`, `front` and `back` are carried over unchanged.
pub fn grade_and_reschedule(card: &Card, raw_answer: &str, now: DateTime<Utc>) -> GradeOutcome {
    let was_correct = is_correct_answer(card, raw_answer);

    let (repetitions, interval) = if was_correct {
        let repetitions = card.repetitions.saturating_add(1);
        (repetitions, next_interval(repetitions, card.interval))
    } else {
        (0, 1)
    };

    GradeOutcome {
        card: Card {
            next_review: due_after(now, interval),
            interval,
            repetitions,
            ..card.clone()
        },
        was_correct,
    }
}

/// Format an interval in days to a human-readable string
pub fn format_interval(days: u32) -> String {
    if days == 0 {
        "now".to_string()
    } else if days < 7 {
        format!("{}d", days)
    } else if days < 30 {
        format!("{}w", days / 7)
    } else if days < 365 {
        format!("{}mo", days / 30)
    } else {
        format!("{}y", days / 365)
    }
}
