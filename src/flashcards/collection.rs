//! The authoritative, ordered card list and its bulk operations

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::models::{Card, ReviewStats};
use super::storage::{FlashcardStorageError, Result};

/// Ordered collection of cards; insertion order is presentation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardCollection {
    cards: Vec<Card>,
}

impl CardCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Append a new, immediately due card
    pub fn add(&mut self, front: &str, back: &str, now: DateTime<Utc>) -> Result<Card> {
        if front.trim().is_empty() {
            return Err(FlashcardStorageError::EmptyField("front"));
        }
        if back.trim().is_empty() {
            return Err(FlashcardStorageError::EmptyField("back"));
        }

        let card = Card::new(front.to_string(), back.to_string(), now);
        log::info!("Added card {}", card.id);
        self.cards.push(card.clone());
        Ok(card)
    }

    /// Write a card back by id
    pub fn replace(&mut self, card: Card) -> Result<()> {
        let slot = self
            .cards
            .iter_mut()
            .find(|c| c.id == card.id)
            .ok_or_else(|| FlashcardStorageError::CardNotFound(card.id.clone()))?;
        *slot = card;
        Ok(())
    }

    /// Restore every card to its freshly created scheduling state
    pub fn reset_progress(&mut self, now: DateTime<Utc>) {
        for card in &mut self.cards {
            card.next_review = now;
            card.interval = 1;
            card.repetitions = 0;
        }
        log::info!("Reset learning progress for {} cards", self.cards.len());
    }

    /// Remove every card
    pub fn clear(&mut self) {
        log::info!("Removed {} cards", self.cards.len());
        self.cards.clear();
    }

    /// Replace the whole collection
    pub fn replace_all(&mut self, cards: Vec<Card>) {
        log::info!("Replaced collection with {} cards", cards.len());
        self.cards = cards;
    }

    pub fn stats(&self, now: DateTime<Utc>) -> ReviewStats {
        ReviewStats::compute(&self.cards, now)
    }

    /// Serialize for export: a pretty-printed JSON array
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.cards)?)
    }
}

/// Parse and validate an exported card file.
///
/// The whole file is rejected if any element is malformed, so a failed
/// import never leaves a partial collection behind.
pub fn parse_import(content: &str) -> Result<Vec<Card>> {
    let value: Value = serde_json::from_str(content)?;
    let items = value
        .as_array()
        .ok_or_else(|| invalid("expected an array of cards"))?;

    let mut cards = Vec::with_capacity(items.len());
    let mut seen = HashSet::new();

    for (i, item) in items.iter().enumerate() {
        let card: Card = serde_json::from_value(item.clone())
            .map_err(|e| invalid(format!("card {}: {}", i, e)))?;

        if card.interval < 1 {
            return Err(invalid(format!("card {}: interval must be at least 1", i)));
        }
        if !seen.insert(card.id.clone()) {
            return Err(invalid(format!("card {}: duplicate id {}", i, card.id)));
        }

        cards.push(card);
    }

    Ok(cards)
}

fn invalid(reason: impl Into<String>) -> FlashcardStorageError {
    FlashcardStorageError::InvalidFormat(reason.into())
}
