use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use flashdeck_lib::flashcards::{Card, FlashcardStorage, GradeOutcome, StudyDeck};

use crate::config::Config;

/// Shared application state for CLI commands
pub struct App {
    pub config: Config,
    pub storage: FlashcardStorage,
    pub deck: StudyDeck,
}

impl App {
    /// Load config and the persisted collection
    pub fn new(data_dir: Option<PathBuf>, config_path: Option<&Path>) -> Result<Self> {
        let config = Config::load(config_path)?;

        let data_dir = match data_dir.or_else(|| config.data_dir.clone()) {
            Some(dir) => dir,
            None => FlashcardStorage::default_data_dir()
                .context("Failed to get data directory")?,
        };

        let storage = FlashcardStorage::new(data_dir);
        let collection = storage.load()
            .with_context(|| format!("Failed to load cards from {}", storage.cards_path().display()))?;

        Ok(Self {
            config,
            storage,
            deck: StudyDeck::new(collection),
        })
    }

    /// Persist the current collection
    pub fn save(&self) -> Result<()> {
        self.storage.save(self.deck.collection())
            .context("Failed to save cards")
    }

    pub fn add_card(&mut self, front: &str, back: &str, now: DateTime<Utc>) -> Result<Card> {
        let card = self.deck.add(front, back, now).context("Failed to add card")?;
        self.save()?;
        Ok(card)
    }

    /// Grade the card that was shown and persist the result
    pub fn answer(&mut self, card_id: &str, answer: &str, now: DateTime<Utc>) -> Result<Option<GradeOutcome>> {
        let outcome = self.deck.answer_presented(card_id, answer, now)
            .context("Failed to record answer")?;
        if outcome.is_some() {
            self.save()?;
        }
        Ok(outcome)
    }

    pub fn reset_progress(&mut self, now: DateTime<Utc>) -> Result<()> {
        self.deck.reset_progress(now);
        self.save()
    }

    pub fn clear(&mut self) -> Result<()> {
        self.deck.clear();
        self.save()
    }

    /// Replace the collection with validated cards
    pub fn import(&mut self, cards: Vec<Card>) -> Result<()> {
        self.deck.import(cards);
        self.save()
    }

    pub fn read_import(&self, path: &Path) -> Result<Vec<Card>> {
        self.storage.read_import(path)
            .with_context(|| format!("Error importing cards from {}", path.display()))
    }

    pub fn export(&self, path: &Path) -> Result<()> {
        self.storage.export_to(self.deck.collection(), path)
            .with_context(|| format!("Failed to export cards to {}", path.display()))
    }

    /// Ask a yes/no question on stdin unless confirmation is waived
    pub fn confirm(&self, question: &str, assume_yes: bool) -> Result<bool> {
        if assume_yes || !self.config.confirm_destructive {
            return Ok(true);
        }

        print!("{} [y/N] ", question);
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
    }

    /// Default export file name, e.g. flashcards-2024-05-01.json
    pub fn default_export_name(now: DateTime<Utc>) -> PathBuf {
        PathBuf::from(format!("flashcards-{}.json", now.format("%Y-%m-%d")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn create_test_app() -> (App, TempDir) {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");
        std::fs::write(&config_path, "confirm_destructive = false\n").unwrap();

        let app = App::new(Some(temp.path().join("data")), Some(&config_path)).unwrap();
        (app, temp)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_default_export_name() {
        assert_eq!(
            App::default_export_name(now()),
            PathBuf::from("flashcards-2024-05-01.json")
        );
    }

    #[test]
    fn test_changes_are_persisted() {
        let (mut app, temp) = create_test_app();
        let card = app.add_card("sol", "sun", now()).unwrap();
        app.answer(&card.id, "SUN", now()).unwrap().unwrap();

        let reloaded = App::new(Some(temp.path().join("data")), Some(&temp.path().join("config.toml"))).unwrap();
        let card = &reloaded.deck.cards()[0];
        assert_eq!(card.repetitions, 1);
        assert!(!card.is_due(now()));
    }

    #[test]
    fn test_export_import_cycle() {
        let (mut app, temp) = create_test_app();
        app.add_card("luna", "moon", now()).unwrap();
        let path = temp.path().join("backup.json");
        app.export(&path).unwrap();

        app.clear().unwrap();
        assert!(app.deck.cards().is_empty());

        let cards = app.read_import(&path).unwrap();
        app.import(cards).unwrap();
        assert_eq!(app.deck.cards()[0].back, "moon");
    }

    #[test]
    fn test_confirmation_waived_by_config() {
        let (app, _temp) = create_test_app();
        assert!(app.confirm("Really?", false).unwrap());
    }
}
