//! CLI command implementations.
//!
//! Each command lives in its own submodule and takes an already validated
//! [`CardRequest`](crate::request::CardRequest).

mod check;
mod generate;

pub use check::{check, pool_summary};
pub use generate::{GenerateOptions, GenerateSummary, generate, report};

use std::io::Read;
use std::path::Path;

use crate::error_fmt::{AppError, IoResultExt, SettingsResultExt};
use crate::request::{self, CardRequest};
use crate::settings::Settings;

/// Load settings and validate the form fields into a request.
///
/// The copy count needs no settings, so it is checked before anything is
/// read from disk. The round range comes from the settings file.
pub fn load_request(
    config: &Path,
    copies: &str,
    round: &str,
    phrases: &Path,
) -> Result<(Settings, CardRequest), AppError> {
    let copies = request::parse_copies(copies)?;
    let settings = Settings::load(config).with_config_path(&config.display().to_string())?;
    let round = request::parse_round(round, settings.rounds)?;
    let text = read_phrase_text(phrases)?;
    let request = CardRequest::with_phrases(copies, round, &text)?;
    Ok((settings, request))
}

/// Read the phrase list from a file, or from stdin when the path is `-`.
pub fn read_phrase_text(path: &Path) -> Result<String, AppError> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .with_context("failed to read phrases from stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(path).with_context(&format!("failed to read {}", path.display()))
}
