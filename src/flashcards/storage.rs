//! Storage operations for flashcards
//!
//! Directory structure:
//! ```text
//! {data-dir}/
//! └── flashcards.json   # Array of all cards, in presentation order
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::collection::{parse_import, CardCollection};
use super::models::Card;

#[derive(Error, Debug)]
pub enum FlashcardStorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Card {0} must not be empty")]
    EmptyField(&'static str),

    #[error("Could not determine data directory")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, FlashcardStorageError>;

const CARDS_FILE: &str = "flashcards.json";

/// Storage manager for the card collection
pub struct FlashcardStorage {
    /// Base path for app data (e.g., ~/.local/share/flashdeck)
    data_dir: PathBuf,
}

impl FlashcardStorage {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Platform data directory used when none is configured
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("flashdeck"))
            .ok_or(FlashcardStorageError::DataDirNotFound)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the persisted card array
    pub fn cards_path(&self) -> PathBuf {
        self.data_dir.join(CARDS_FILE)
    }

    /// Load the collection; a missing file is an empty collection
    pub fn load(&self) -> Result<CardCollection> {
        let path = self.cards_path();
        if !path.exists() {
            log::debug!("No card file at {:?}, starting empty", path);
            return Ok(CardCollection::new());
        }

        let content = fs::read_to_string(&path)?;
        let cards: Vec<Card> = serde_json::from_str(&content)?;
        log::debug!("Loaded {} cards from {:?}", cards.len(), path);
        Ok(CardCollection::from_cards(cards))
    }

    /// Persist the collection verbatim
    pub fn save(&self, collection: &CardCollection) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;

        // Write a sibling file and rename it into place
        let path = self.cards_path();
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, collection.to_json()?)?;
        fs::rename(&tmp, &path)?;

        log::debug!("Saved {} cards to {:?}", collection.len(), path);
        Ok(())
    }

    /// Write an export file
    pub fn export_to(&self, collection: &CardCollection, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, collection.to_json()?)?;
        log::info!("Exported {} cards to {:?}", collection.len(), path);
        Ok(())
    }

    /// Read and validate an export file without applying it
    pub fn read_import(&self, path: &Path) -> Result<Vec<Card>> {
        let content = fs::read_to_string(path)?;
        let cards = parse_import(&content)?;
        log::debug!("Validated {} cards from {:?}", cards.len(), path);
        Ok(cards)
    }
}
