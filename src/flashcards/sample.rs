//! Starter decks for a fresh session

use super::error::Result;
use super::repository::FlashcardRepository;

const SAMPLE_DECKS: &[(&str, &[(&str, &str)])] = &[
    (
        "Spanish Vocabulary",
        &[
            ("Hello (Spanish)", "Hola"),
            ("Goodbye (Spanish)", "Adiós"),
            ("Thank you (Spanish)", "Gracias"),
        ],
    ),
    (
        "Math Formulas",
        &[
            ("Quadratic Formula", "x = (-b ± √(b²-4ac)) / 2a"),
            ("Area of a Circle", "A = πr²"),
        ],
    ),
    (
        "History Facts",
        &[
            ("When did World War II end?", "1945"),
            ("Who was the first President of the United States?", "George Washington"),
        ],
    ),
];

/// Populate the repository with the starter decks
pub fn seed_sample_decks(repo: &mut FlashcardRepository) -> Result<()> {
    for (title, cards) in SAMPLE_DECKS {
        let deck = repo.create_deck(title)?;
        for (question, answer) in cards.iter() {
            repo.create_card(deck.id, question, answer)?;
        }
    }

    log::debug!("Seeded {} sample decks", SAMPLE_DECKS.len());
    Ok(())
}
