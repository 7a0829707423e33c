//! Flashcard and spaced repetition system
//!
//! This module provides:
//! - Card model and persisted JSON shape
//! - Answer grading and interval scheduling
//! - Due-card selection and study session rotation
//! - Collection operations (add, reset, clear, import, export) and storage

pub mod algorithm;
pub mod collection;
pub mod deck;
pub mod models;
pub mod session;
pub mod storage;

pub use algorithm::{format_interval, grade_and_reschedule};
pub use collection::CardCollection;
pub use deck::StudyDeck;
pub use models::*;
pub use session::{due_cards, SessionState, StudySession};
pub use storage::{FlashcardStorage, FlashcardStorageError};
