use std::path::Path;

use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &mut App, path: &Path, assume_yes: bool, format: &OutputFormat) -> Result<()> {
    // Validate before asking so a bad file never touches the collection
    let cards = app.read_import(path)?;
    let count = cards.len();

    let question = format!("Import {} cards? This will replace current cards.", count);
    if !app.confirm(&question, assume_yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    app.import(cards)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "imported": count });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => println!("Successfully imported {} cards", count),
    }

    Ok(())
}
