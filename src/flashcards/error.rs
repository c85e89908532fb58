use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlashcardError {
    #[error("{field} must not be empty")]
    Validation { field: &'static str },

    #[error("Deck not found: {0}")]
    DeckNotFound(Uuid),

    #[error("Card not found: {0}")]
    CardNotFound(Uuid),

    #[error("No cards in this deck")]
    EmptyDeck,
}

impl FlashcardError {
    /// True for both deck and card lookups that missed
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::DeckNotFound(_) | Self::CardNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, FlashcardError>;

/// Trim a required text field, rejecting empty or whitespace-only input
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FlashcardError::Validation { field });
    }
    Ok(trimmed.to_string())
}
