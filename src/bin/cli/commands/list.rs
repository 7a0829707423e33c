use anyhow::Result;
use chrono::Utc;

use flashdeck_lib::flashcards::Card;

use crate::app::App;
use crate::render::terminal::render_cards;
use crate::OutputFormat;

pub fn run(app: &App, due_only: bool, format: &OutputFormat, use_color: bool) -> Result<()> {
    let now = Utc::now();
    let cards: Vec<&Card> = if due_only {
        app.deck.due(now)
    } else {
        app.deck.cards().iter().collect()
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&cards)?);
        }
        OutputFormat::Plain => {
            if cards.is_empty() {
                if due_only {
                    println!("No cards due for review.");
                } else {
                    println!("No cards yet. Add one with `flashdeck add <FRONT> <BACK>`.");
                }
                return Ok(());
            }

            println!("{}", render_cards(&cards, now, use_color));
            println!("\n{} cards", cards.len());
        }
    }

    Ok(())
}
