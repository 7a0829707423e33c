use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration loaded from a TOML file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Where flashcards.json lives (default: platform data dir)
    pub data_dir: Option<PathBuf>,

    /// Colored terminal output
    pub color: bool,

    /// Ask before reset, clear and import
    pub confirm_destructive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            color: true,
            confirm_destructive: true,
        }
    }
}

impl Config {
    /// Default config file path: ~/.config/flashdeck/config.toml
    pub fn default_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("could not determine user config directory")?
            .join("flashdeck")
            .join("config.toml"))
    }

    /// Load config from the given path, or the default path.
    /// A missing file yields the defaults; nothing is written.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Ok(p) => p,
                Err(e) => {
                    log::debug!("{}, using default config", e);
                    return Ok(Self::default());
                }
            },
        };

        if !config_path.exists() {
            if path.is_some() {
                anyhow::bail!("config file not found: {}", config_path.display());
            }
            log::debug!("Config file {:?} not found, using defaults", config_path);
            return Ok(Self::default());
        }

        log::debug!("Loading config from {:?}", config_path);
        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config: {}", config_path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("failed to parse config: {}", config_path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file() {
        let config = Config::parse("color = false\ndata_dir = \"/tmp/cards\"\n").unwrap();

        assert!(!config.color);
        assert!(config.confirm_destructive);
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/cards")));
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(Config::parse("color = \"yes\"").is_err());
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let temp = TempDir::new().unwrap();
        assert!(Config::load(Some(&temp.path().join("missing.toml"))).is_err());

        let path = temp.path().join("config.toml");
        std::fs::write(&path, "confirm_destructive = false\n").unwrap();
        assert!(!Config::load(Some(&path)).unwrap().confirm_destructive);
    }
}
