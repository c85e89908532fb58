mod app;
mod commands;
mod render;
#[cfg(feature = "tui")]
mod tui;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "flashdeck-cli", about = "Flashcard decks and study sessions", version)]
struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    /// Start without the sample decks
    #[arg(long, global = true)]
    no_samples: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// List all decks
    Decks,

    /// List the cards of a deck
    Cards {
        /// Deck title (case-insensitive prefix match)
        deck: String,
    },

    /// Launch interactive TUI
    #[cfg(feature = "tui")]
    Tui,
}

impl Cli {
    fn launches_tui(&self) -> bool {
        match self.command {
            None => true,
            #[cfg(feature = "tui")]
            Some(Command::Tui) => true,
            Some(_) => false,
        }
    }
}

fn init_logging(cli: &Cli) {
    // Log lines would tear the alternate screen, so the TUI stays quiet
    // unless RUST_LOG asks otherwise.
    let default_filter = if cli.launches_tui() { "off" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let app = app::App::new(cli.config.as_deref(), cli.no_samples)?;
    let use_color = !cli.no_color && app.config.color && std::io::stdout().is_terminal();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            #[cfg(feature = "tui")]
            {
                tui::run(app)?;
            }
            #[cfg(not(feature = "tui"))]
            {
                let _ = app;
                eprintln!("TUI not available (built without 'tui' feature). Use a subcommand.");
                eprintln!("Run with --help for usage.");
                std::process::exit(1);
            }
        }
        Some(Command::Decks) => {
            commands::decks::run(&app, &cli.format, use_color)?;
        }
        Some(Command::Cards { deck }) => {
            commands::cards::run(&app, &deck, &cli.format, use_color)?;
        }
        #[cfg(feature = "tui")]
        Some(Command::Tui) => {
            tui::run(app)?;
        }
    }

    Ok(())
}
