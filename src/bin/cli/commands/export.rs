use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, path: Option<PathBuf>, format: &OutputFormat) -> Result<()> {
    let path = path.unwrap_or_else(|| App::default_export_name(Utc::now()));
    app.export(&path)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": path.to_string_lossy(),
                "cards": app.deck.cards().len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Cards exported successfully to {}", path.display());
        }
    }

    Ok(())
}
