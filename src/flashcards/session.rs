//! Due-card selection and study session rotation

use chrono::{DateTime, Utc};

use super::algorithm::grade_and_reschedule;
use super::models::{Card, GradeOutcome};

/// Cards with `next_review <= now`, in collection order
pub fn due_cards(cards: &[Card], now: DateTime<Utc>) -> Vec<&Card> {
    cards.iter().filter(|card| card.is_due(now)).collect()
}

/// What a session shows at a given moment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState<'a> {
    /// Nothing is due
    Idle,
    /// A card is waiting for an answer
    Presenting {
        card: &'a Card,
        /// Position of `card` in the due sequence
        index: usize,
        due_count: usize,
    },
}

/// Cursor over the due sequence of a collection.
///
/// The session holds no cards. Every query recomputes the due sequence from
/// the collection passed in, so the cursor is the only state. Owners must
/// call [`StudySession::reset`] whenever the collection is replaced or
/// restructured.
#[derive(Debug, Clone, Default)]
pub struct StudySession {
    cursor: usize,
}

impl StudySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart the session from the first due card
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current state, clamping the cursor to 0 if the due sequence shrank
    /// underneath it
    pub fn state<'a>(&mut self, cards: &'a [Card], now: DateTime<Utc>) -> SessionState<'a> {
        let due = due_cards(cards, now);
        if due.is_empty() {
            return SessionState::Idle;
        }

        if self.cursor >= due.len() {
            log::debug!("Cursor {} past {} due cards, restarting", self.cursor, due.len());
            self.cursor = 0;
        }

        SessionState::Presenting {
            card: due[self.cursor],
            index: self.cursor,
            due_count: due.len(),
        }
    }

    /// The card awaiting an answer, if any
    pub fn current<'a>(&mut self, cards: &'a [Card], now: DateTime<Utc>) -> Option<&'a Card> {
        match self.state(cards, now) {
            SessionState::Presenting { card, .. } => Some(card),
            SessionState::Idle => None,
        }
    }

    /// Grade the current card and advance the cursor.
    ///
    /// The next position is computed against the due sequence of the
    /// collection with the graded card substituted in, then wraps to 0 when
    /// it runs off the end. A graded card is always rescheduled into the
    /// future, so it leaves the due sequence whether or not the answer was
    /// correct.
    ///
    /// Returns `None` without touching anything when nothing is due. The
    /// caller is responsible for writing the returned card back into the
    /// collection.
    pub fn submit(
        &mut self,
        cards: &[Card],
        raw_answer: &str,
        now: DateTime<Utc>,
    ) -> Option<GradeOutcome> {
        let current = self.current(cards, now)?;
        let outcome = grade_and_reschedule(current, raw_answer, now);

        let remaining = cards
            .iter()
            .filter(|card| {
                if card.id == outcome.card.id {
                    outcome.card.is_due(now)
                } else {
                    card.is_due(now)
                }
            })
            .count();

        let next = self.cursor + 1;
        self.cursor = if next >= remaining { 0 } else { next };

        log::debug!(
            "Graded card {} ({}), {} still due, cursor now {}",
            outcome.card.id,
            if outcome.was_correct { "correct" } else { "incorrect" },
            remaining,
            self.cursor
        );

        Some(outcome)
    }

    /// Like [`StudySession::submit`], but only grades when the card at the
    /// cursor is still `presented_id`.
    ///
    /// The due sequence can change between showing a card and receiving the
    /// answer (another card may come due in the meantime). In that case
    /// nothing is graded, the cursor stays put and `None` is returned so the
    /// caller can present the new current card.
    pub fn submit_presented(
        &mut self,
        cards: &[Card],
        presented_id: &str,
        raw_answer: &str,
        now: DateTime<Utc>,
    ) -> Option<GradeOutcome> {
        let current = self.current(cards, now)?;
        if current.id != presented_id {
            log::debug!("Card {} is no longer current, not grading", presented_id);
            return None;
        }
        self.submit(cards, raw_answer, now)
    }
}
