//! Data models for the flashcard system

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A flashcard with question (front) and answer (back) plus its
/// spaced repetition state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub front: String,
    pub back: String,
    /// The card is not due before this instant
    pub next_review: DateTime<Utc>,
    /// Days until the next review if answered correctly from this state
    pub interval: u32,
    /// Consecutive correct answers since the last lapse
    pub repetitions: u32,
}

impl Card {
    /// Create a new card that is immediately due
    pub fn new(front: String, back: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            front,
            back,
            next_review: now,
            interval: 1,
            repetitions: 0,
        }
    }

    /// Check if the card is due for review at `now`
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review <= now
    }

    /// Learning stage derived from the repetition count
    pub fn stage(&self) -> CardStage {
        match self.repetitions {
            0 => CardStage::New,
            1 | 2 => CardStage::Learning,
            _ => CardStage::Review,
        }
    }
}

/// Coarse learning stage of a card, used for statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardStage {
    /// Never answered correctly, or lapsed since
    New,
    /// One or two consecutive correct answers
    Learning,
    /// Three or more consecutive correct answers
    Review,
}

/// Result of grading one answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeOutcome {
    /// The card with its rescheduled state
    pub card: Card,
    pub was_correct: bool,
}

impl GradeOutcome {
    /// Feedback line shown to the learner
    pub fn feedback(&self) -> String {
        if self.was_correct {
            "Correct!".to_string()
        } else {
            format!("Incorrect. The answer was: {}", self.card.back)
        }
    }
}

/// Statistics for a collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub total_cards: usize,
    pub new_cards: usize,
    pub learning_cards: usize,
    pub review_cards: usize,
    pub due_cards: usize,
    /// Earliest upcoming review among cards that are not yet due
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review: Option<DateTime<Utc>>,
}

impl ReviewStats {
    pub fn compute(cards: &[Card], now: DateTime<Utc>) -> Self {
        let mut stats = Self {
            total_cards: cards.len(),
            ..Self::default()
        };

        for card in cards {
            match card.stage() {
                CardStage::New => stats.new_cards += 1,
                CardStage::Learning => stats.learning_cards += 1,
                CardStage::Review => stats.review_cards += 1,
            }

            if card.is_due(now) {
                stats.due_cards += 1;
            } else if stats.next_review.map_or(true, |t| card.next_review < t) {
                stats.next_review = Some(card.next_review);
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_new_card_is_immediately_due() {
        let card = Card::new("Capital of France".to_string(), "Paris".to_string(), t0());

        assert_eq!(card.interval, 1);
        assert_eq!(card.repetitions, 0);
        assert_eq!(card.next_review, t0());
        assert!(card.is_due(t0()));
        assert!(Uuid::parse_str(&card.id).is_ok());
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let card = Card::new("front".to_string(), "back".to_string(), t0());
        let value = serde_json::to_value(&card).unwrap();

        assert!(value.get("nextReview").and_then(|v| v.as_str()).is_some());
        assert_eq!(value["interval"], 1);
        assert_eq!(value["repetitions"], 0);
        assert!(value.get("next_review").is_none());
    }

    #[test]
    fn test_parses_browser_iso_timestamps() {
        let json = r#"{
            "id": "abc",
            "front": "Hola",
            "back": "Hello",
            "nextReview": "2024-03-01T09:00:00.000Z",
            "interval": 6,
            "repetitions": 2
        }"#;

        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.next_review, t0());
        assert_eq!(card.stage(), CardStage::Learning);
    }

    #[test]
    fn test_feedback_messages() {
        let card = Card::new("2 + 2".to_string(), "4".to_string(), t0());
        let right = GradeOutcome { card: card.clone(), was_correct: true };
        let wrong = GradeOutcome { card, was_correct: false };

        assert_eq!(right.feedback(), "Correct!");
        assert_eq!(wrong.feedback(), "Incorrect. The answer was: 4");
    }

    #[test]
    fn test_review_stats() {
        let mut due_new = Card::new("a".to_string(), "a".to_string(), t0());
        due_new.next_review = t0() - Duration::hours(1);

        let mut learning = Card::new("b".to_string(), "b".to_string(), t0());
        learning.repetitions = 2;
        learning.interval = 6;
        learning.next_review = t0() + Duration::days(6);

        let mut mature = Card::new("c".to_string(), "c".to_string(), t0());
        mature.repetitions = 4;
        mature.interval = 38;
        mature.next_review = t0() + Duration::days(2);

        let stats = ReviewStats::compute(&[due_new, learning, mature], t0());

        assert_eq!(stats.total_cards, 3);
        assert_eq!(stats.new_cards, 1);
        assert_eq!(stats.learning_cards, 1);
        assert_eq!(stats.review_cards, 1);
        assert_eq!(stats.due_cards, 1);
        assert_eq!(stats.next_review, Some(t0() + Duration::days(2)));
    }

    #[test]
    fn test_review_stats_empty() {
        assert_eq!(ReviewStats::compute(&[], t0()), ReviewStats::default());
    }
}
