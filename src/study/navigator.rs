//! Navigation state for a single study session
//!
//! A session walks a fixed snapshot of cards one at a time. Moving between
//! cards clamps at both ends and always lands on the question side.

use serde::Serialize;

use crate::flashcards::{Flashcard, FlashcardError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavState {
    /// Nothing to study
    Empty,
    Active { position: usize, revealed: bool },
}

/// The side of the current card that is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face<'a> {
    Question(&'a str),
    Answer(&'a str),
}

/// One-based progress through a session, e.g. "2 of 5"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    current: usize,
    total: usize,
}

impl Progress {
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Completed share of the session, in (0, 1]
    pub fn fraction(&self) -> f64 {
        self.current as f64 / self.total as f64
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.current, self.total)
    }
}

#[derive(Debug, Clone)]
pub struct StudyNavigator {
    cards: Vec<Flashcard>,
    state: NavState,
}

impl StudyNavigator {
    pub fn new(cards: Vec<Flashcard>) -> Self {
        let state = if cards.is_empty() {
            NavState::Empty
        } else {
            NavState::Active {
                position: 0,
                revealed: false,
            }
        };
        Self { cards, state }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state == NavState::Empty
    }

    pub fn position(&self) -> Option<usize> {
        match self.state {
            NavState::Empty => None,
            NavState::Active { position, .. } => Some(position),
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self.state, NavState::Active { revealed: true, .. })
    }

    pub fn current_card(&self) -> Result<&Flashcard> {
        match self.state {
            NavState::Empty => Err(FlashcardError::EmptyDeck),
            NavState::Active { position, .. } => Ok(&self.cards[position]),
        }
    }

    pub fn visible_face(&self) -> Result<Face<'_>> {
        let card = self.current_card()?;
        Ok(if self.is_revealed() {
            Face::Answer(&card.answer)
        } else {
            Face::Question(&card.question)
        })
    }

    pub fn progress(&self) -> Option<Progress> {
        self.position().map(|position| Progress {
            current: position + 1,
            total: self.cards.len(),
        })
    }

    pub fn has_next(&self) -> bool {
        self.position().map_or(false, |p| p + 1 < self.cards.len())
    }

    pub fn has_previous(&self) -> bool {
        self.position().map_or(false, |p| p > 0)
    }

    /// Toggle between question and answer
    pub fn flip(&mut self) {
        if let NavState::Active { revealed, .. } = &mut self.state {
            *revealed = !*revealed;
        }
    }

    /// Advance one card. Returns false at the last card.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.move_by(1);
        true
    }

    /// Step back one card. Returns false at the first card.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.move_by(-1);
        true
    }

    fn move_by(&mut self, delta: isize) {
        if let NavState::Active { position, revealed } = &mut self.state {
            *position = position.saturating_add_signed(delta);
            *revealed = false;
        }
    }
}
