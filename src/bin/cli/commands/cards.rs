use anyhow::Result;

use crate::app::App;
use crate::render::terminal::{pad, paint, truncate, Color};
use crate::OutputFormat;

const QUESTION_WIDTH: usize = 50;

pub fn run(app: &App, deck_name: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let deck = app.find_deck(deck_name)?;
    let cards = app.list_cards(&deck)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "deck": deck,
                "cards": cards,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{}", paint(&deck.title, Color::BOLD, use_color));
            println!();

            if cards.is_empty() {
                println!("  No cards in this deck.");
                return Ok(());
            }

            for (i, card) in cards.iter().enumerate() {
                let question = pad(&truncate(&card.question, QUESTION_WIDTH), QUESTION_WIDTH);
                println!("{:>3}. {} {}",
                    i + 1,
                    question,
                    paint(&truncate(&card.answer, 40), Color::CYAN, use_color));
            }

            println!("\n{} cards total", cards.len());
        }
    }

    Ok(())
}
