use std::path::Path;

use anyhow::{bail, Context, Result};

use flashdeck_lib::flashcards::{seed_sample_decks, Deck, Flashcard, FlashcardRepository};
use flashdeck_lib::notify::Notifier;
use flashdeck_lib::{FlashdeckConfig, StudySession};

/// Shared application state for CLI commands
pub struct App {
    pub config: FlashdeckConfig,
    pub repo: FlashcardRepository,
}

impl App {
    /// Load configuration and build a fresh in-memory repository
    pub fn new(config_path: Option<&Path>, no_samples: bool) -> Result<Self> {
        let config = FlashdeckConfig::load_or_default(config_path)
            .context("Failed to load configuration")?;

        let mut repo = FlashcardRepository::new();
        if config.sample_decks && !no_samples {
            seed_sample_decks(&mut repo).context("Failed to seed sample decks")?;
        }

        Ok(Self { config, repo })
    }

    pub fn list_decks(&self) -> Vec<Deck> {
        self.repo.list_decks()
    }

    pub fn list_cards(&self, deck: &Deck) -> Result<Vec<Flashcard>> {
        self.repo
            .list_cards(deck.id)
            .with_context(|| format!("Failed to list cards of '{}'", deck.title))
    }

    /// Find a deck by title (case-insensitive, exact match first, then prefix)
    pub fn find_deck(&self, name: &str) -> Result<Deck> {
        let decks = self.list_decks();
        let name_lower = name.to_lowercase();

        if let Some(deck) = decks.iter().find(|d| d.title.to_lowercase() == name_lower) {
            return Ok(deck.clone());
        }

        let matches: Vec<&Deck> = decks.iter()
            .filter(|d| d.title.to_lowercase().starts_with(&name_lower))
            .collect();

        match matches.len() {
            0 => bail!("No deck matching '{}'. Available decks:\n{}", name,
                decks.iter().map(|d| format!("  - {}", d.title)).collect::<Vec<_>>().join("\n")),
            1 => Ok(matches[0].clone()),
            _ => bail!("Ambiguous deck name '{}'. Matches:\n{}", name,
                matches.iter().map(|d| format!("  - {}", d.title)).collect::<Vec<_>>().join("\n")),
        }
    }

    /// Hand the repository to an interactive session
    #[cfg_attr(not(feature = "tui"), allow(dead_code))]
    pub fn into_session<N: Notifier>(self, notifier: N) -> (StudySession<N>, FlashdeckConfig) {
        (StudySession::new(self.repo, notifier), self.config)
    }
}
