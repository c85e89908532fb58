use anyhow::Result;

use crate::app::App;
use crate::render::terminal::{pad, paint, truncate, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let decks = app.list_decks();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&decks)?);
        }
        OutputFormat::Plain => {
            if decks.is_empty() {
                println!("No decks yet.");
                return Ok(());
            }

            let title_width = decks.iter().map(|d| d.title.chars().count()).max().unwrap_or(5).clamp(5, 40);

            println!("{} {:>5} {}",
                paint(&pad("Title", title_width), Color::BOLD, use_color),
                "Cards", "Created");
            println!("{} {} {}",
                "\u{2500}".repeat(title_width),
                "\u{2500}".repeat(5),
                "\u{2500}".repeat(10));

            for deck in &decks {
                let title = pad(&truncate(&deck.title, title_width), title_width);
                let created = deck.created_at.format("%Y-%m-%d").to_string();
                println!("{} {:>5} {}",
                    title, deck.card_count, paint(&created, Color::GRAY, use_color));
            }

            println!("\n{} decks total", decks.len());
        }
    }

    Ok(())
}
