use std::fmt;
use std::io;

use owo_colors::OwoColorize;

use crate::assets::AssetError;
use crate::output::WriteError;
use crate::render::RenderError;
use crate::request::RequestError;
use crate::settings::SettingsError;

/// Application error with context for actionable error messages.
#[derive(Debug)]
pub enum AppError {
    /// Input rejected before generation
    Request(RequestError),
    /// Settings file could not be loaded
    Settings { path: String, source: SettingsError },
    /// A static asset could not be read
    Asset(AssetError),
    /// Template rendering failed
    Render(RenderError),
    /// A card file could not be written; earlier cards are kept
    Write { error: WriteError, written: usize },
    /// IO error with context
    Io { context: String, source: io::Error },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Request(source) => write!(f, "{}", format_request_error(source)),
            AppError::Settings { path, source } => {
                write!(f, "{}", format_settings_error(path, source))
            }
            AppError::Asset(source) => write!(f, "{}", format_asset_error(source)),
            AppError::Render(source) => write!(f, "{}", format_cli_error(&source.to_string())),
            AppError::Write { error, written } => {
                write!(f, "{}", format_write_error(error, *written))
            }
            AppError::Io { context, source } => {
                write!(f, "{}", format_cli_error(&format!("{}: {}", context, source)))
            }
        }
    }
}

impl std::error::Error for AppError {}

impl From<RequestError> for AppError {
    fn from(e: RequestError) -> Self {
        AppError::Request(e)
    }
}

impl From<AssetError> for AppError {
    fn from(e: AssetError) -> Self {
        AppError::Asset(e)
    }
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        AppError::Render(e)
    }
}

/// Extension trait to add context to IO results.
pub trait IoResultExt<T> {
    fn with_context(self, context: &str) -> Result<T, AppError>;
}

impl<T> IoResultExt<T> for Result<T, io::Error> {
    fn with_context(self, context: &str) -> Result<T, AppError> {
        self.map_err(|e| AppError::Io {
            context: context.to_string(),
            source: e,
        })
    }
}

/// Extension trait to add the config path to settings results.
pub trait SettingsResultExt<T> {
    fn with_config_path(self, path: &str) -> Result<T, AppError>;
}

impl<T> SettingsResultExt<T> for Result<T, SettingsError> {
    fn with_config_path(self, path: &str) -> Result<T, AppError> {
        self.map_err(|e| AppError::Settings {
            path: path.to_string(),
            source: e,
        })
    }
}

// ============================================================================
// Formatting functions (internal implementation)
// ============================================================================

fn format_cli_error(message: &str) -> String {
    format!("{}: {}\n", "error".red().bold(), message)
}

fn format_request_error(error: &RequestError) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: {}\n", "error".red().bold(), error));
    out.push('\n');

    let hint = match error {
        RequestError::CopiesNotANumber(_) => {
            "Pass the number of cards as a whole number, e.g. --copies 30".to_string()
        }
        RequestError::CopiesNotPositive(_) => {
            "At least one card must be generated, e.g. --copies 1".to_string()
        }
        RequestError::RoundNotANumber(_) => {
            "Pass the round as a whole number, e.g. --round 1".to_string()
        }
        RequestError::RoundOutOfRange { max, .. } => {
            format!("Pick a round between 1 and {}, or raise `rounds` in bingo.yml", max)
        }
        RequestError::TooFewPhrases { required, found } => format!(
            "A card has {} cells; add {} more phrase(s), one per line",
            required,
            required - found
        ),
        RequestError::DuplicatePhrase(_) => {
            "Each phrase may appear only once in the list".to_string()
        }
    };

    out.push_str(&format!("  {}:\n", "To fix this".bold()));
    out.push_str(&format!("    {}\n", hint.dimmed()));
    out
}

fn format_settings_error(path: &str, error: &SettingsError) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));
    out.push_str(&format!("invalid settings in {}\n", path.cyan()));
    out.push('\n');
    out.push_str(&format!("  {}\n", error.to_string().dimmed()));
    out.push('\n');
    out.push_str(&format!("  {}:\n", "To fix this".bold()));
    out.push_str(&format!(
        "    Known keys: {}\n",
        "output_dir, assets_dir, embed_assets, title, rounds".cyan()
    ));
    out
}

fn format_asset_error(error: &AssetError) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: {}\n", "error".red().bold(), error));
    out.push('\n');
    out.push_str(&format!("  {}\n", "No cards were written.".dimmed()));
    out.push('\n');
    out.push_str(&format!("  {}:\n", "To fix this".bold()));
    out.push_str(&format!(
        "    The assets directory needs {}, {}, {}, {}, {} and {}\n",
        "logo.png".cyan(),
        "background_<round>.png".cyan(),
        "round_<round>.png".cyan(),
        "qr_left.png".cyan(),
        "qr_right.png".cyan(),
        "style.css".cyan()
    ));
    out
}

fn format_write_error(error: &WriteError, written: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));
    out.push_str(&format!(
        "could not save {}: {}\n",
        error.path.display().to_string().yellow(),
        error.source
    ));
    out.push('\n');
    out.push_str(&format!(
        "  {}\n",
        format!(
            "Stopped after {} card(s); files already written were left in place.",
            written
        )
        .dimmed()
    ));
    out
}
