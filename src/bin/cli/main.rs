mod app;
mod commands;
mod config;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "flashdeck", about = "Spaced-repetition flashcards in the terminal", version)]
struct Cli {
    /// Directory holding flashcards.json (overrides the config file)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file (default: <config dir>/flashdeck/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

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
    /// Create a new card, due immediately
    Add {
        /// Question side
        front: String,
        /// Answer side
        back: String,
    },

    /// List cards
    List {
        /// Only cards due now
        #[arg(long)]
        due: bool,
    },

    /// Study due cards interactively (default)
    Study,

    /// Show learning statistics
    Stats,

    /// Reset all learning progress
    Reset {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Remove all cards
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Export cards as JSON (default: flashcards-YYYY-MM-DD.json)
    Export {
        path: Option<PathBuf>,
    },

    /// Import cards from a JSON export, replacing the current cards
    Import {
        path: PathBuf,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut app = app::App::new(cli.data_dir, cli.config.as_deref())?;
    let use_color = !cli.no_color && app.config.color && std::io::stdout().is_terminal();

    match cli.command.unwrap_or(Command::Study) {
        Command::Add { front, back } => {
            commands::add::run(&mut app, &front, &back, &cli.format, use_color)?;
        }
        Command::List { due } => {
            commands::list::run(&app, due, &cli.format, use_color)?;
        }
        Command::Study => {
            commands::study::run(&mut app, use_color)?;
        }
        Command::Stats => {
            commands::stats::run(&app, &cli.format, use_color)?;
        }
        Command::Reset { yes } => {
            commands::reset::run(&mut app, yes, &cli.format)?;
        }
        Command::Clear { yes } => {
            commands::clear::run(&mut app, yes, &cli.format)?;
        }
        Command::Export { path } => {
            commands::export::run(&app, path, &cli.format)?;
        }
        Command::Import { path, yes } => {
            commands::import::run(&mut app, &path, yes, &cli.format)?;
        }
    }

    Ok(())
}
