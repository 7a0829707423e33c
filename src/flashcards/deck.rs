//! A card collection bound to the study session that walks it

use chrono::{DateTime, Utc};

use super::collection::CardCollection;
use super::models::{Card, GradeOutcome, ReviewStats};
use super::session::{due_cards, SessionState, StudySession};
use super::storage::Result;

/// Owns the collection and its session.
///
/// Every operation that changes the collection's identity (add, import,
/// reset, remove-all) restarts the session. Grading writes one card back
/// and only advances the cursor.
#[derive(Debug, Clone, Default)]
pub struct StudyDeck {
    collection: CardCollection,
    session: StudySession,
}

impl StudyDeck {
    pub fn new(collection: CardCollection) -> Self {
        Self {
            collection,
            session: StudySession::new(),
        }
    }

    pub fn collection(&self) -> &CardCollection {
        &self.collection
    }

    pub fn cards(&self) -> &[Card] {
        self.collection.cards()
    }

    pub fn due(&self, now: DateTime<Utc>) -> Vec<&Card> {
        due_cards(self.collection.cards(), now)
    }

    pub fn stats(&self, now: DateTime<Utc>) -> ReviewStats {
        self.collection.stats(now)
    }

    pub fn state(&mut self, now: DateTime<Utc>) -> SessionState<'_> {
        self.session.state(self.collection.cards(), now)
    }

    pub fn current(&mut self, now: DateTime<Utc>) -> Option<&Card> {
        self.session.current(self.collection.cards(), now)
    }

    /// Grade the current card and store the result.
    ///
    /// `None` when nothing is due.
    pub fn answer(&mut self, raw_answer: &str, now: DateTime<Utc>) -> Result<Option<GradeOutcome>> {
        let outcome = self.session.submit(self.collection.cards(), raw_answer, now);
        self.store(outcome)
    }

    /// Grade the card with id `presented_id` if it is still the current one.
    ///
    /// `None` when nothing is due or another card has taken the cursor.
    pub fn answer_presented(
        &mut self,
        presented_id: &str,
        raw_answer: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<GradeOutcome>> {
        let outcome = self.session.submit_presented(self.collection.cards(), presented_id, raw_answer, now);
        self.store(outcome)
    }

    fn store(&mut self, outcome: Option<GradeOutcome>) -> Result<Option<GradeOutcome>> {
        let Some(outcome) = outcome else {
            return Ok(None);
        };
        self.collection.replace(outcome.card.clone())?;
        Ok(Some(outcome))
    }

    pub fn add(&mut self, front: &str, back: &str, now: DateTime<Utc>) -> Result<Card> {
        let card = self.collection.add(front, back, now)?;
        self.session.reset();
        Ok(card)
    }

    pub fn import(&mut self, cards: Vec<Card>) {
        self.collection.replace_all(cards);
        self.session.reset();
    }

    pub fn reset_progress(&mut self, now: DateTime<Utc>) {
        self.collection.reset_progress(now);
        self.session.reset();
    }

    pub fn clear(&mut self) {
        self.collection.clear();
        self.session.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 2, hour, 0, 0).unwrap()
    }

    fn deck() -> StudyDeck {
        let mut deck = StudyDeck::default();
        deck.add("one", "1", t(0)).unwrap();
        deck.add("two", "2", t(0)).unwrap();
        deck.add("three", "3", t(0)).unwrap();
        deck
    }

    fn current_front(deck: &mut StudyDeck, now: DateTime<Utc>) -> Option<String> {
        deck.current(now).map(|c| c.front.clone())
    }

    #[test]
    fn test_answer_writes_card_back() {
        let mut deck = deck();

        let outcome = deck.answer("1", t(1)).unwrap().unwrap();
        assert!(outcome.was_correct);

        let stored = deck.collection().get(&outcome.card.id).unwrap();
        assert_eq!(stored.repetitions, 1);
        assert_eq!(stored.next_review, t(1) + Duration::days(1));
        assert_eq!(deck.due(t(1)).len(), 2);
    }

    #[test]
    fn test_answer_when_idle_is_noop() {
        let mut deck = StudyDeck::default();
        assert!(deck.answer("anything", t(1)).unwrap().is_none());
        assert_eq!(deck.state(t(1)), SessionState::Idle);
    }

    #[test]
    fn test_full_pass_then_idle() {
        let mut deck = deck();
        let mut feedback = Vec::new();

        while let Some(card) = deck.current(t(1)) {
            let answer = card.back.clone();
            let outcome = deck.answer(&answer, t(1)).unwrap().unwrap();
            feedback.push(outcome.feedback());
        }

        assert_eq!(feedback, vec!["Correct!"; 3]);
        assert!(deck.due(t(1)).is_empty());

        // Everything comes back a day later
        assert_eq!(deck.due(t(1) + Duration::days(1)).len(), 3);
    }

    #[test]
    fn test_answer_is_not_applied_to_a_card_that_came_due_meanwhile() {
        let t0 = t(3);
        let mut x = Card::new("X".to_string(), "x".to_string(), t0);
        x.next_review = t0 + Duration::seconds(30);
        let x_id = x.id.clone();
        let a = Card::new("A".to_string(), "a".to_string(), t0);
        let mut deck = StudyDeck::new(CardCollection::from_cards(vec![x, a]));

        let shown = deck.current(t0).unwrap().clone();
        assert_eq!(shown.front, "A");

        let answered_at = t0 + Duration::seconds(60);
        assert!(deck.answer_presented(&shown.id, "a", answered_at).unwrap().is_none());
        assert_eq!(deck.collection().get(&x_id).unwrap().repetitions, 0);
        assert_eq!(deck.collection().get(&shown.id), Some(&shown));

        // Once the learner has seen the card actually at the cursor, grading works
        let current = deck.current(answered_at).unwrap().clone();
        assert_eq!(current.front, "X");
        let outcome = deck.answer_presented(&current.id, "x", answered_at).unwrap().unwrap();
        assert!(outcome.was_correct);
        assert_eq!(deck.collection().get(&x_id).unwrap().repetitions, 1);
    }

    #[test]
    fn test_structural_changes_restart_session() {
        let mut deck = deck();
        deck.answer("wrong", t(1)).unwrap();
        assert_eq!(current_front(&mut deck, t(1)).as_deref(), Some("three"));

        deck.add("four", "4", t(1)).unwrap();
        assert_eq!(current_front(&mut deck, t(1)).as_deref(), Some("two"));

        deck.reset_progress(t(1));
        assert_eq!(current_front(&mut deck, t(1)).as_deref(), Some("one"));

        let imported = vec![Card::new("solo".to_string(), "s".to_string(), t(1))];
        deck.import(imported);
        assert_eq!(current_front(&mut deck, t(1)).as_deref(), Some("solo"));

        deck.clear();
        assert!(deck.cards().is_empty());
        assert_eq!(deck.state(t(1)), SessionState::Idle);
    }

    #[test]
    fn test_lapse_is_not_retried_in_same_pass() {
        let mut deck = deck();
        let mut seen = Vec::new();

        while let Some(card) = deck.current(t(2)) {
            seen.push(card.front.clone());
            deck.answer("no idea", t(2)).unwrap();
        }

        assert_eq!(seen.len(), 3);
        let stats = deck.stats(t(2));
        assert_eq!(stats.due_cards, 0);
        assert_eq!(stats.new_cards, 3);
    }

    #[test]
    fn test_study_over_several_days() {
        let mut deck = StudyDeck::default();
        deck.add("Capital of France", "Paris", t(0)).unwrap();

        let mut now = t(1);
        let mut intervals = Vec::new();
        for _ in 0..4 {
            let outcome = deck.answer(" PARIS ", now).unwrap().unwrap();
            intervals.push(outcome.card.interval);
            now = outcome.card.next_review;
            assert!(deck.current(now - Duration::seconds(1)).is_none());
        }

        assert_eq!(intervals, vec![1, 6, 15, 38]);
        assert_eq!(deck.stats(now).review_cards, 1);
    }
}
