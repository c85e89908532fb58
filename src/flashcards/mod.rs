//! Flashcard decks for flashdeck
//!
//! This module provides:
//! - Deck and flashcard models
//! - An in-memory repository with deck/card CRUD
//! - Starter sample decks

pub mod error;
pub mod models;
pub mod repository;
pub mod sample;

pub use error::{FlashcardError, Result};
pub use models::*;
pub use repository::FlashcardRepository;
pub use sample::seed_sample_decks;
