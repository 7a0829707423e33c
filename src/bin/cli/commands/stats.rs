use anyhow::Result;
use chrono::Utc;

use crate::app::App;
use crate::render::terminal::{paint, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let now = Utc::now();
    let stats = app.deck.stats(now);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Plain => {
            println!("Cards:     {}", stats.total_cards);
            println!("  New:      {}", stats.new_cards);
            println!("  Learning: {}", stats.learning_cards);
            println!("  Review:   {}", stats.review_cards);

            let due = stats.due_cards.to_string();
            let color = if stats.due_cards > 0 { Color::YELLOW } else { Color::GREEN };
            println!("Due now:   {}", paint(&due, color, use_color));

            if let Some(next) = stats.next_review {
                println!("Next:      {}", next.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M"));
            }
        }
    }

    Ok(())
}
