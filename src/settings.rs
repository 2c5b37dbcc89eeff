//! Settings configuration for card generation.
//!
//! The settings file (`bingo.yml` by default) is optional and configures
//! where cards are written, where assets live and how they are included.
//! Command-line flags override anything set here.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::request::DEFAULT_ROUNDS;

pub const DEFAULT_CONFIG_FILE: &str = "bingo.yml";
pub const DEFAULT_OUTPUT_DIR: &str = "output_cards";
pub const DEFAULT_TITLE: &str = "Bingo Card";

/// Configuration loaded from `bingo.yml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory the card files are written to.
    pub output_dir: PathBuf,

    /// Directory holding the logo, per-round images, QR codes and
    /// stylesheet. When unset, cards use the built-in stylesheet and no
    /// images.
    pub assets_dir: Option<PathBuf>,

    /// Inline assets as data URIs instead of linking them by path.
    pub embed_assets: bool,

    /// Document title of each card.
    pub title: String,

    /// Highest accepted round selector.
    pub rounds: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            assets_dir: None,
            embed_assets: true,
            title: DEFAULT_TITLE.to_string(),
            rounds: DEFAULT_ROUNDS,
        }
    }
}

/// Errors that can occur when loading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("rounds must be at least 1")]
    NoRounds,
}

impl Settings {
    /// Load settings from a file path.
    ///
    /// Returns the default settings if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let settings = match std::fs::read_to_string(path) {
            // An empty document deserializes to unit, not a map
            Ok(content) if content.trim().is_empty() => Self::default(),
            Ok(content) => serde_yaml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(SettingsError::Io(e)),
        };

        if settings.rounds == 0 {
            return Err(SettingsError::NoRounds);
        }

        Ok(settings)
    }
}
