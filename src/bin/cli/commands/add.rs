use anyhow::Result;
use chrono::Utc;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &mut App, front: &str, back: &str, format: &OutputFormat, _use_color: bool) -> Result<()> {
    let card = app.add_card(front, back, Utc::now())?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&card)?);
        }
        OutputFormat::Plain => {
            println!("Added card \"{}\"", card.front);
            println!("  ID: {}", card.id);
        }
    }

    Ok(())
}
