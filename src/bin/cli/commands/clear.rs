use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &mut App, assume_yes: bool, format: &OutputFormat) -> Result<()> {
    let count = app.deck.cards().len();
    if count == 0 {
        println!("No cards to remove.");
        return Ok(());
    }

    if !app.confirm("Are you sure you want to remove ALL cards?", assume_yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    app.clear()?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "removed": count });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => println!("All cards have been removed"),
    }

    Ok(())
}
