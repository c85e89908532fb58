//! Success and error notices raised after user operations
//!
//! Notices are informational. The display layer decides how and whether to
//! show them.

use serde::{Deserialize, Serialize};

use crate::flashcards::FlashcardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn deck_created() -> Self {
        Self::success("Deck created", "Your new deck has been created.")
    }

    pub fn deck_updated() -> Self {
        Self::success("Deck updated", "The deck has been successfully updated.")
    }

    pub fn deck_deleted() -> Self {
        Self::success("Deck deleted", "The deck has been permanently deleted.")
    }

    pub fn card_added() -> Self {
        Self::success("Card added", "Your new flashcard has been created.")
    }

    pub fn card_updated() -> Self {
        Self::success("Card updated", "The flashcard has been successfully updated.")
    }

    pub fn card_deleted() -> Self {
        Self::success("Card deleted", "The flashcard has been removed.")
    }

    pub fn from_error(err: &FlashcardError) -> Self {
        let title = match err {
            FlashcardError::Validation { .. } => "Missing information",
            FlashcardError::DeckNotFound(_) | FlashcardError::CardNotFound(_) => "Not found",
            FlashcardError::EmptyDeck => "Nothing to study",
        };
        Self::error(title, err.to_string())
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// Receiver for notices
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Writes notices to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => log::info!("{}", notice),
            NoticeKind::Error => log::warn!("{}", notice),
        }
    }
}

/// Collects notices in order, e.g. for a view that drains them after each action
impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}
