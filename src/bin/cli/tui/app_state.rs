use uuid::Uuid;

use flashdeck_lib::flashcards::{Deck, Flashcard, FlashcardError};
use flashdeck_lib::notify::Notice;
use flashdeck_lib::{FlashdeckConfig, StudySession, View};

use crate::app::App;

/// Text prompts shown in the status bar
#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
    NewDeck,
    RenameDeck { deck_id: Uuid },
    CardQuestion { editing: Option<Uuid> },
    CardAnswer { editing: Option<Uuid>, question: String },
}

impl Prompt {
    pub fn label(&self) -> &'static str {
        match self {
            Prompt::NewDeck => "New deck",
            Prompt::RenameDeck { .. } => "Rename deck",
            Prompt::CardQuestion { .. } => "Question",
            Prompt::CardAnswer { .. } => "Answer",
        }
    }
}

pub struct TuiState {
    pub session: StudySession<Vec<Notice>>,
    pub config: FlashdeckConfig,

    pub deck_selected: usize,
    pub card_selected: usize,

    // Input state
    pub prompt: Option<Prompt>,
    pub input_text: String,

    /// Latest notice, shown until the next keypress
    pub flash_message: Option<Notice>,

    pub show_help: bool,
    pub quit: bool,
}

impl TuiState {
    pub fn new(app: App) -> Self {
        let (session, config) = app.into_session(Vec::new());
        Self {
            session,
            config,
            deck_selected: 0,
            card_selected: 0,
            prompt: None,
            input_text: String::new(),
            flash_message: None,
            show_help: false,
            quit: false,
        }
    }

    pub fn decks(&self) -> Vec<Deck> {
        self.session.repository().list_decks()
    }

    pub fn cards(&self) -> Vec<Flashcard> {
        self.session.selected_cards()
    }

    fn selected_deck_id(&self) -> Option<Uuid> {
        self.decks().get(self.deck_selected).map(|d| d.id)
    }

    fn selected_card(&self) -> Option<Flashcard> {
        self.cards().get(self.card_selected).cloned()
    }

    /// Move the newest notice into the flash slot
    fn take_notices(&mut self) {
        if let Some(last) = self.session.notifier_mut().drain(..).last() {
            self.flash_message = Some(last);
        }
    }

    fn clamp_selection(&mut self) {
        self.deck_selected = self.deck_selected.min(self.decks().len().saturating_sub(1));
        self.card_selected = self.card_selected.min(self.cards().len().saturating_sub(1));
    }

    // ==================== List movement ====================

    pub fn move_down(&mut self) {
        match self.session.view() {
            View::Decks => {
                if self.deck_selected + 1 < self.decks().len() {
                    self.deck_selected += 1;
                }
            }
            View::Cards { .. } => {
                if self.card_selected + 1 < self.cards().len() {
                    self.card_selected += 1;
                }
            }
            View::Study { .. } => {}
        }
    }

    pub fn move_up(&mut self) {
        match self.session.view() {
            View::Decks => self.deck_selected = self.deck_selected.saturating_sub(1),
            View::Cards { .. } => self.card_selected = self.card_selected.saturating_sub(1),
            View::Study { .. } => {}
        }
    }

    // ==================== Decks ====================

    pub fn open_selected_deck(&mut self) {
        if let Some(deck_id) = self.selected_deck_id() {
            if self.session.select_deck(deck_id).is_ok() {
                self.card_selected = 0;
            }
        }
    }

    pub fn begin_new_deck(&mut self) {
        self.open_prompt(Prompt::NewDeck, String::new());
    }

    pub fn begin_rename_deck(&mut self) {
        if let Some(deck) = self.decks().get(self.deck_selected) {
            self.open_prompt(Prompt::RenameDeck { deck_id: deck.id }, deck.title.clone());
        }
    }

    pub fn delete_selected_deck(&mut self) {
        if let Some(deck_id) = self.selected_deck_id() {
            let _ = self.session.delete_deck(deck_id);
            self.take_notices();
            self.clamp_selection();
        }
    }

    pub fn back_to_decks(&mut self) {
        self.session.back_to_decks();
    }

    // ==================== Cards ====================

    pub fn begin_add_card(&mut self) {
        self.open_prompt(Prompt::CardQuestion { editing: None }, String::new());
    }

    pub fn begin_edit_card(&mut self) {
        if let Some(card) = self.selected_card() {
            self.open_prompt(Prompt::CardQuestion { editing: Some(card.id) }, card.question);
        }
    }

    pub fn delete_selected_card(&mut self) {
        if let Some(card) = self.selected_card() {
            let _ = self.session.delete_card(card.id);
            self.take_notices();
            self.clamp_selection();
        }
    }

    pub fn start_study(&mut self) {
        let _ = self.session.start_studying();
        self.take_notices();
    }

    // ==================== Study ====================

    pub fn flip(&mut self) {
        if let Some(nav) = self.session.navigator_mut() {
            nav.flip();
        }
    }

    pub fn next_card(&mut self) {
        if let Some(nav) = self.session.navigator_mut() {
            nav.next();
        }
    }

    pub fn previous_card(&mut self) {
        if let Some(nav) = self.session.navigator_mut() {
            nav.previous();
        }
    }

    pub fn back_to_cards(&mut self) {
        self.session.back_to_cards();
    }

    // ==================== Input ====================

    fn open_prompt(&mut self, prompt: Prompt, initial: String) {
        self.prompt = Some(prompt);
        self.input_text = initial;
    }

    pub fn cancel_input(&mut self) {
        self.prompt = None;
        self.input_text.clear();
    }

    /// Submit the current prompt. A rejected save keeps the prompt open
    /// with its text so the user can correct it.
    pub fn submit_input(&mut self) {
        let Some(prompt) = self.prompt.clone() else {
            return;
        };

        let accepted = match prompt {
            Prompt::NewDeck => {
                let created = self.session.save_deck(None, &self.input_text);
                if let Ok(deck) = &created {
                    self.deck_selected = self.decks().iter().position(|d| d.id == deck.id).unwrap_or(0);
                }
                created.is_ok()
            }
            Prompt::RenameDeck { deck_id } => {
                self.session.save_deck(Some(deck_id), &self.input_text).is_ok()
            }
            Prompt::CardQuestion { editing } => {
                if self.input_text.trim().is_empty() {
                    self.flash_message = Some(Notice::from_error(&FlashcardError::Validation {
                        field: "question",
                    }));
                    return;
                }
                let answer = editing
                    .and_then(|id| self.session.repository().get_card(id).ok())
                    .map(|card| card.answer)
                    .unwrap_or_default();
                let question = std::mem::replace(&mut self.input_text, answer);
                self.prompt = Some(Prompt::CardAnswer { editing, question });
                return;
            }
            Prompt::CardAnswer { editing, question } => {
                let saved = self.session.save_card(editing, &question, &self.input_text);
                if let Ok(Some(card)) = &saved {
                    if editing.is_none() {
                        self.card_selected = self.cards().iter().position(|c| c.id == card.id).unwrap_or(0);
                    }
                }
                saved.is_ok()
            }
        };

        self.take_notices();
        if accepted {
            self.cancel_input();
        }
    }
}
