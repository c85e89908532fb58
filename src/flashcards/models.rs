//! Data models for the flashcard system

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A deck is a named collection of flashcards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub id: Uuid,
    pub title: String,
    /// Number of cards in the deck, maintained by the repository
    #[serde(default)]
    pub card_count: usize,
    pub created_at: DateTime<Utc>,
}

impl Deck {
    pub(crate) fn new(title: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            card_count: 0,
            created_at: Utc::now(),
        }
    }
}

/// A flashcard with a question (front) and an answer (back)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: Uuid,
    pub deck_id: Uuid,
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    pub(crate) fn new(deck_id: Uuid, question: String, answer: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            deck_id,
            question,
            answer,
        }
    }
}
