use anyhow::Result;
use chrono::Utc;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &mut App, assume_yes: bool, format: &OutputFormat) -> Result<()> {
    if app.deck.cards().is_empty() {
        println!("No cards to reset.");
        return Ok(());
    }

    if !app.confirm("Are you sure you want to reset all learning progress?", assume_yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    app.reset_progress(Utc::now())?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "reset": app.deck.cards().len() });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => println!("All learning progress has been reset"),
    }

    Ok(())
}
