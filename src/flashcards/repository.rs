//! In-memory repository for decks and flashcards
//!
//! The repository owns the deck → card association:
//! ```text
//! decks       Vec<Deck>                  insertion order
//! deck_cards  HashMap<deck id, Vec<id>>  study order per deck
//! cards       HashMap<card id, Flashcard>
//! ```
//! Every mutation validates its input and resolves its ids before touching
//! any collection, so a failed call leaves the repository unchanged.

use std::collections::HashMap;

use uuid::Uuid;

use super::error::{require_text, FlashcardError, Result};
use super::models::*;
use crate::study::StudyNavigator;

/// Authoritative store for decks and their cards
#[derive(Debug, Default)]
pub struct FlashcardRepository {
    decks: Vec<Deck>,
    deck_cards: HashMap<Uuid, Vec<Uuid>>,
    cards: HashMap<Uuid, Flashcard>,
}

impl FlashcardRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn deck_index(&self, deck_id: Uuid) -> Result<usize> {
        self.decks
            .iter()
            .position(|d| d.id == deck_id)
            .ok_or(FlashcardError::DeckNotFound(deck_id))
    }

    /// Recompute the cached card count from the deck's card index
    fn refresh_card_count(&mut self, deck_id: Uuid) {
        let count = self.deck_cards.get(&deck_id).map_or(0, Vec::len);
        if let Some(deck) = self.decks.iter_mut().find(|d| d.id == deck_id) {
            deck.card_count = count;
        }
    }

    // ==================== Deck Operations ====================

    /// List all decks in creation order
    pub fn list_decks(&self) -> Vec<Deck> {
        self.decks.clone()
    }

    /// Get a specific deck
    pub fn get_deck(&self, deck_id: Uuid) -> Result<Deck> {
        let pos = self.deck_index(deck_id)?;
        Ok(self.decks[pos].clone())
    }

    pub fn deck_count(&self) -> usize {
        self.decks.len()
    }

    /// Create a new, empty deck
    pub fn create_deck(&mut self, title: &str) -> Result<Deck> {
        let title = require_text("title", title)?;

        let deck = Deck::new(title);
        self.deck_cards.insert(deck.id, Vec::new());
        self.decks.push(deck.clone());

        log::debug!("Created deck {} ({:?})", deck.id, deck.title);
        Ok(deck)
    }

    /// Replace a deck's title
    pub fn update_deck(&mut self, deck_id: Uuid, title: &str) -> Result<Deck> {
        let pos = self.deck_index(deck_id)?;
        let title = require_text("title", title)?;

        let deck = &mut self.decks[pos];
        deck.title = title;

        log::debug!("Renamed deck {} to {:?}", deck.id, deck.title);
        Ok(deck.clone())
    }

    /// Delete a deck and all its cards
    pub fn delete_deck(&mut self, deck_id: Uuid) -> Result<()> {
        let pos = self.deck_index(deck_id)?;

        let card_ids = self.deck_cards.remove(&deck_id).unwrap_or_default();
        for card_id in &card_ids {
            self.cards.remove(card_id);
        }
        self.decks.remove(pos);

        log::debug!("Deleted deck {} with {} cards", deck_id, card_ids.len());
        Ok(())
    }

    // ==================== Card Operations ====================

    /// List the cards of a deck in study order
    pub fn list_cards(&self, deck_id: Uuid) -> Result<Vec<Flashcard>> {
        let card_ids = self
            .deck_cards
            .get(&deck_id)
            .ok_or(FlashcardError::DeckNotFound(deck_id))?;

        Ok(card_ids
            .iter()
            .filter_map(|id| self.cards.get(id))
            .cloned()
            .collect())
    }

    /// Get a specific card
    pub fn get_card(&self, card_id: Uuid) -> Result<Flashcard> {
        self.cards
            .get(&card_id)
            .cloned()
            .ok_or(FlashcardError::CardNotFound(card_id))
    }

    /// Total number of cards across all decks
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Append a new card to the end of a deck
    pub fn create_card(&mut self, deck_id: Uuid, question: &str, answer: &str) -> Result<Flashcard> {
        if !self.deck_cards.contains_key(&deck_id) {
            return Err(FlashcardError::DeckNotFound(deck_id));
        }
        let question = require_text("question", question)?;
        let answer = require_text("answer", answer)?;

        let card = Flashcard::new(deck_id, question, answer);
        self.deck_cards.entry(deck_id).or_default().push(card.id);
        self.cards.insert(card.id, card.clone());
        self.refresh_card_count(deck_id);

        log::debug!("Added card {} to deck {}", card.id, deck_id);
        Ok(card)
    }

    /// Replace both sides of a card, keeping its id and position
    pub fn update_card(&mut self, card_id: Uuid, question: &str, answer: &str) -> Result<Flashcard> {
        if !self.cards.contains_key(&card_id) {
            return Err(FlashcardError::CardNotFound(card_id));
        }
        let question = require_text("question", question)?;
        let answer = require_text("answer", answer)?;

        let card = self
            .cards
            .get_mut(&card_id)
            .ok_or(FlashcardError::CardNotFound(card_id))?;
        card.question = question;
        card.answer = answer;

        log::debug!("Updated card {}", card_id);
        Ok(card.clone())
    }

    /// Delete a card from its deck
    pub fn delete_card(&mut self, card_id: Uuid) -> Result<()> {
        let card = self
            .cards
            .remove(&card_id)
            .ok_or(FlashcardError::CardNotFound(card_id))?;

        if let Some(card_ids) = self.deck_cards.get_mut(&card.deck_id) {
            card_ids.retain(|id| *id != card_id);
        }
        self.refresh_card_count(card.deck_id);

        log::debug!("Deleted card {} from deck {}", card_id, card.deck_id);
        Ok(())
    }

    // ==================== Study ====================

    /// Begin a study session over a snapshot of the deck's current cards
    pub fn start_study(&self, deck_id: Uuid) -> Result<StudyNavigator> {
        let cards = self.list_cards(deck_id)?;
        log::info!("Starting study of deck {} with {} cards", deck_id, cards.len());
        Ok(StudyNavigator::new(cards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo_with_deck(title: &str) -> (FlashcardRepository, Deck) {
        let mut repo = FlashcardRepository::new();
        let deck = repo.create_deck(title).unwrap();
        (repo, deck)
    }

    fn assert_counts_consistent(repo: &FlashcardRepository) {
        for deck in repo.list_decks() {
            let cards = repo.list_cards(deck.id).unwrap();
            assert_eq!(deck.card_count, cards.len(), "deck {}", deck.title);
            assert!(cards.iter().all(|c| c.deck_id == deck.id));
        }
    }

    #[test]
    fn test_create_deck() {
        let (repo, deck) = repo_with_deck("Spanish");

        assert_eq!(deck.title, "Spanish");
        assert_eq!(deck.card_count, 0);
        assert_eq!(repo.list_decks(), vec![deck.clone()]);
        assert!(repo.list_cards(deck.id).unwrap().is_empty());
    }

    #[test]
    fn test_create_deck_rejects_blank_title() {
        let mut repo = FlashcardRepository::new();

        for title in ["", "   ", "\n\t"] {
            assert_eq!(
                repo.create_deck(title),
                Err(FlashcardError::Validation { field: "title" })
            );
        }
        assert!(repo.list_decks().is_empty());
    }

    #[test]
    fn test_create_deck_trims_title() {
        let (_, deck) = repo_with_deck("  Math  ");
        assert_eq!(deck.title, "Math");
    }

    #[test]
    fn test_list_decks_keeps_insertion_order() {
        let mut repo = FlashcardRepository::new();
        for title in ["Zoology", "Art", "Music"] {
            repo.create_deck(title).unwrap();
        }

        let titles: Vec<_> = repo.list_decks().into_iter().map(|d| d.title).collect();
        assert_eq!(titles, ["Zoology", "Art", "Music"]);
    }

    #[test]
    fn test_update_deck_replaces_title_only() {
        let (mut repo, deck) = repo_with_deck("Spanish");
        repo.create_card(deck.id, "Hola", "Hello").unwrap();

        let updated = repo.update_deck(deck.id, "Spanish 101").unwrap();

        assert_eq!(updated.id, deck.id);
        assert_eq!(updated.title, "Spanish 101");
        assert_eq!(updated.card_count, 1);
        assert_eq!(updated.created_at, deck.created_at);
    }

    #[test]
    fn test_update_deck_errors() {
        let (mut repo, deck) = repo_with_deck("Spanish");
        let missing = Uuid::new_v4();

        assert_eq!(
            repo.update_deck(missing, "   "),
            Err(FlashcardError::DeckNotFound(missing))
        );
        assert_eq!(
            repo.update_deck(deck.id, " "),
            Err(FlashcardError::Validation { field: "title" })
        );
        assert_eq!(repo.get_deck(deck.id).unwrap().title, "Spanish");
    }

    #[test]
    fn test_delete_deck_removes_cards() {
        let (mut repo, deck) = repo_with_deck("History");
        let other = repo.create_deck("Other").unwrap();
        let card = repo.create_card(deck.id, "WWII ended?", "1945").unwrap();
        let kept = repo.create_card(other.id, "Q", "A").unwrap();

        repo.delete_deck(deck.id).unwrap();

        assert_eq!(repo.list_cards(deck.id), Err(FlashcardError::DeckNotFound(deck.id)));
        assert_eq!(repo.get_card(card.id), Err(FlashcardError::CardNotFound(card.id)));
        assert_eq!(repo.get_card(kept.id).unwrap(), kept);
        assert_eq!(repo.card_count(), 1);
        assert_counts_consistent(&repo);
    }

    #[test]
    fn test_delete_deck_twice_fails() {
        let (mut repo, deck) = repo_with_deck("History");

        repo.delete_deck(deck.id).unwrap();
        assert_eq!(repo.delete_deck(deck.id), Err(FlashcardError::DeckNotFound(deck.id)));
        assert_eq!(repo.delete_deck(deck.id), Err(FlashcardError::DeckNotFound(deck.id)));
    }

    #[test]
    fn test_create_card_appends_in_order() {
        let (mut repo, deck) = repo_with_deck("Math");
        let first = repo.create_card(deck.id, "1+1", "2").unwrap();
        let second = repo.create_card(deck.id, "2+2", "4").unwrap();

        let cards = repo.list_cards(deck.id).unwrap();
        assert_eq!(cards, vec![first, second]);
        assert_eq!(repo.get_deck(deck.id).unwrap().card_count, 2);
    }

    #[test]
    fn test_create_card_errors_leave_repo_unchanged() {
        let (mut repo, deck) = repo_with_deck("Math");
        let missing = Uuid::new_v4();

        assert_eq!(
            repo.create_card(missing, "", ""),
            Err(FlashcardError::DeckNotFound(missing))
        );
        assert_eq!(
            repo.create_card(deck.id, "  ", "2"),
            Err(FlashcardError::Validation { field: "question" })
        );
        assert_eq!(
            repo.create_card(deck.id, "1+1", "\t"),
            Err(FlashcardError::Validation { field: "answer" })
        );

        assert_eq!(repo.card_count(), 0);
        assert_eq!(repo.get_deck(deck.id).unwrap().card_count, 0);
    }

    #[test]
    fn test_update_card_round_trip() {
        let (mut repo, deck) = repo_with_deck("Math");
        let a = repo.create_card(deck.id, "1+1", "2").unwrap();
        let b = repo.create_card(deck.id, "2+2", "4").unwrap();

        let updated = repo.update_card(a.id, "3+3", " 6 ").unwrap();

        assert_eq!(updated.id, a.id);
        let read = repo.get_card(a.id).unwrap();
        assert_eq!(read.question, "3+3");
        assert_eq!(read.answer, "6");

        let ids: Vec<_> = repo.list_cards(deck.id).unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }

    #[test]
    fn test_update_card_errors() {
        let (mut repo, deck) = repo_with_deck("Math");
        let card = repo.create_card(deck.id, "1+1", "2").unwrap();
        let missing = Uuid::new_v4();

        assert_eq!(
            repo.update_card(missing, "q", "a"),
            Err(FlashcardError::CardNotFound(missing))
        );
        assert_eq!(
            repo.update_card(card.id, "new question", ""),
            Err(FlashcardError::Validation { field: "answer" })
        );
        assert_eq!(repo.get_card(card.id).unwrap(), card);
    }

    #[test]
    fn test_delete_card() {
        let (mut repo, deck) = repo_with_deck("Math");
        let a = repo.create_card(deck.id, "1+1", "2").unwrap();
        let b = repo.create_card(deck.id, "2+2", "4").unwrap();

        repo.delete_card(a.id).unwrap();

        assert_eq!(repo.list_cards(deck.id).unwrap(), vec![b]);
        assert_eq!(repo.get_deck(deck.id).unwrap().card_count, 1);
        assert_eq!(repo.delete_card(a.id), Err(FlashcardError::CardNotFound(a.id)));
    }

    #[test]
    fn test_card_count_tracks_mutations() {
        let mut repo = FlashcardRepository::new();
        let spanish = repo.create_deck("Spanish").unwrap();
        let math = repo.create_deck("Math").unwrap();

        let mut ids = Vec::new();
        for i in 0..5 {
            ids.push(repo.create_card(spanish.id, &format!("q{i}"), "a").unwrap().id);
            assert_counts_consistent(&repo);
        }
        repo.create_card(math.id, "1+1", "2").unwrap();
        repo.delete_card(ids[1]).unwrap();
        repo.delete_card(ids[3]).unwrap();
        repo.update_card(ids[0], "changed", "a").unwrap();
        assert_counts_consistent(&repo);

        assert_eq!(repo.get_deck(spanish.id).unwrap().card_count, 3);
        assert_eq!(repo.get_deck(math.id).unwrap().card_count, 1);
    }

    #[test]
    fn test_start_study_snapshots_cards() {
        let (mut repo, deck) = repo_with_deck("Math");
        repo.create_card(deck.id, "1+1", "2").unwrap();

        let nav = repo.start_study(deck.id).unwrap();
        repo.create_card(deck.id, "2+2", "4").unwrap();

        assert_eq!(nav.len(), 1);
        assert_eq!(nav.current_card().unwrap().question, "1+1");

        let missing = Uuid::new_v4();
        assert!(matches!(
            repo.start_study(missing),
            Err(FlashcardError::DeckNotFound(id)) if id == missing
        ));
    }
}
