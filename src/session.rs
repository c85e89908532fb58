//! Screen-level controller for the flashcard app
//!
//! Tracks which view is showing and which deck is selected, routes user
//! intents to the repository, and raises a notice after every user
//! operation. Rendering is left to the caller.

use uuid::Uuid;

use crate::flashcards::{Deck, Flashcard, FlashcardError, FlashcardRepository, Result};
use crate::notify::{Notice, Notifier};
use crate::study::StudyNavigator;

#[derive(Debug, Clone)]
pub enum View {
    /// Deck overview
    Decks,
    /// Card list of one deck
    Cards { deck_id: Uuid },
    /// Studying one deck
    Study {
        deck_id: Uuid,
        navigator: StudyNavigator,
    },
}

pub struct StudySession<N: Notifier> {
    repo: FlashcardRepository,
    notifier: N,
    view: View,
}

impl<N: Notifier> StudySession<N> {
    pub fn new(repo: FlashcardRepository, notifier: N) -> Self {
        Self {
            repo,
            notifier,
            view: View::Decks,
        }
    }

    pub fn repository(&self) -> &FlashcardRepository {
        &self.repo
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn selected_deck_id(&self) -> Option<Uuid> {
        match self.view {
            View::Decks => None,
            View::Cards { deck_id } | View::Study { deck_id, .. } => Some(deck_id),
        }
    }

    /// The selected deck, if it still exists
    pub fn selected_deck(&self) -> Option<Deck> {
        self.selected_deck_id()
            .and_then(|id| self.repo.get_deck(id).ok())
    }

    /// Cards of the selected deck, empty when no deck is selected
    pub fn selected_cards(&self) -> Vec<Flashcard> {
        self.selected_deck_id()
            .and_then(|id| self.repo.list_cards(id).ok())
            .unwrap_or_default()
    }

    pub fn navigator(&self) -> Option<&StudyNavigator> {
        match &self.view {
            View::Study { navigator, .. } => Some(navigator),
            _ => None,
        }
    }

    pub fn navigator_mut(&mut self) -> Option<&mut StudyNavigator> {
        match &mut self.view {
            View::Study { navigator, .. } => Some(navigator),
            _ => None,
        }
    }

    // ==================== Navigation ====================

    /// Open a deck's card list
    pub fn select_deck(&mut self, deck_id: Uuid) -> Result<()> {
        self.repo.get_deck(deck_id)?;
        self.view = View::Cards { deck_id };
        Ok(())
    }

    pub fn back_to_decks(&mut self) {
        self.view = View::Decks;
    }

    /// Leave a study session for the deck's card list
    pub fn back_to_cards(&mut self) {
        if let View::Study { deck_id, .. } = self.view {
            self.view = View::Cards { deck_id };
        }
    }

    /// Start studying the selected deck from its first card.
    ///
    /// Only valid from the card list: elsewhere it returns `Ok(false)` and
    /// leaves the view alone. A deck with no cards fails with
    /// [`FlashcardError::EmptyDeck`] and the session stays on the card list.
    pub fn start_studying(&mut self) -> Result<bool> {
        let View::Cards { deck_id } = self.view else {
            log::debug!("Ignoring study request outside a card list");
            return Ok(false);
        };

        let result = self.repo.start_study(deck_id).and_then(|navigator| {
            if navigator.is_empty() {
                Err(FlashcardError::EmptyDeck)
            } else {
                Ok(navigator)
            }
        });

        match result {
            Ok(navigator) => {
                self.view = View::Study { deck_id, navigator };
                Ok(true)
            }
            Err(err) => {
                self.notifier.notify(Notice::from_error(&err));
                Err(err)
            }
        }
    }

    // ==================== Editing ====================

    /// Create a deck, or rename `editing` when given
    pub fn save_deck(&mut self, editing: Option<Uuid>, title: &str) -> Result<Deck> {
        let result = match editing {
            Some(deck_id) => self.repo.update_deck(deck_id, title),
            None => self.repo.create_deck(title),
        };
        let success: fn() -> Notice = if editing.is_some() {
            Notice::deck_updated
        } else {
            Notice::deck_created
        };
        self.report(result, success)
    }

    /// Delete a deck with its cards, leaving it if it was selected
    pub fn delete_deck(&mut self, deck_id: Uuid) -> Result<()> {
        let result = self.repo.delete_deck(deck_id);
        if result.is_ok() && self.selected_deck_id() == Some(deck_id) {
            self.view = View::Decks;
        }
        self.report(result, Notice::deck_deleted)
    }

    /// Add a card to the selected deck, or update `editing` when given.
    ///
    /// Adding with no deck selected does nothing and returns `Ok(None)`.
    pub fn save_card(
        &mut self,
        editing: Option<Uuid>,
        question: &str,
        answer: &str,
    ) -> Result<Option<Flashcard>> {
        let result = match (editing, self.selected_deck_id()) {
            (Some(card_id), _) => self.repo.update_card(card_id, question, answer),
            (None, Some(deck_id)) => self.repo.create_card(deck_id, question, answer),
            (None, None) => {
                log::debug!("Ignoring new card with no deck selected");
                return Ok(None);
            }
        };
        let success: fn() -> Notice = if editing.is_some() {
            Notice::card_updated
        } else {
            Notice::card_added
        };
        self.report(result, success).map(Some)
    }

    pub fn delete_card(&mut self, card_id: Uuid) -> Result<()> {
        let result = self.repo.delete_card(card_id);
        self.report(result, Notice::card_deleted)
    }

    fn report<T>(&mut self, result: Result<T>, success: fn() -> Notice) -> Result<T> {
        let notice = match &result {
            Ok(_) => success(),
            Err(err) => Notice::from_error(err),
        };
        self.notifier.notify(notice);
        result
    }
}
