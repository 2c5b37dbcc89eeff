//! Static assets shown on every card.
//!
//! A run reads its assets once, before any card is written. Images are
//! either inlined as base64 data URIs or copied next to the cards and
//! linked by relative path.

use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use thiserror::Error;

/// Stylesheet used when no assets directory is configured.
pub const BUILTIN_STYLESHEET: &str = include_str!("templates/style.css");

/// Subdirectory of the output directory that linked assets are copied into.
pub const LINKED_ASSETS_DIR: &str = "assets";

const STYLESHEET_FILE: &str = "style.css";

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("failed to read asset {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("stylesheet {0} is not valid UTF-8")]
    StylesheetEncoding(PathBuf),
}

/// How assets end up in the rendered documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssetMode {
    /// Base64 data URIs and an inline `<style>` block.
    #[default]
    Embed,
    /// Relative links into [`LINKED_ASSETS_DIR`].
    Link,
}

/// One image file read from the assets directory.
#[derive(Debug, Clone)]
pub struct Asset {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl Asset {
    fn read(dir: &Path, file_name: String) -> Result<Self, AssetError> {
        let path = dir.join(&file_name);
        let bytes = std::fs::read(&path).map_err(|source| AssetError::Unreadable {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            mime: mime_for(&path),
            file_name,
            bytes,
        })
    }

    fn reference(&self, mode: AssetMode) -> String {
        match mode {
            AssetMode::Embed => data_uri(self.mime, &self.bytes),
            AssetMode::Link => format!("{}/{}", LINKED_ASSETS_DIR, self.file_name),
        }
    }
}

/// Guesses a MIME type from the file extension.
pub fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("css") => "text/css",
        _ => "application/octet-stream",
    }
}

/// Encodes bytes as a `data:` URI.
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Every named asset for one round.
#[derive(Debug, Clone)]
pub struct AssetBundle {
    pub logo: Asset,
    pub background: Asset,
    pub round_banner: Asset,
    pub qr_left: Asset,
    pub qr_right: Asset,
    pub stylesheet: String,
}

impl AssetBundle {
    /// Reads the assets for `round` from `dir`.
    ///
    /// Expects `logo.png`, `background_<round>.png`, `round_<round>.png`,
    /// `qr_left.png`, `qr_right.png` and `style.css`. Any missing or
    /// unreadable file fails the whole load.
    pub fn load(dir: &Path, round: u8) -> Result<Self, AssetError> {
        let stylesheet_path = dir.join(STYLESHEET_FILE);
        let stylesheet_bytes =
            std::fs::read(&stylesheet_path).map_err(|source| AssetError::Unreadable {
                path: stylesheet_path.clone(),
                source,
            })?;
        let stylesheet = String::from_utf8(stylesheet_bytes)
            .map_err(|_| AssetError::StylesheetEncoding(stylesheet_path))?;

        Ok(Self {
            logo: Asset::read(dir, "logo.png".to_string())?,
            background: Asset::read(dir, format!("background_{}.png", round))?,
            round_banner: Asset::read(dir, format!("round_{}.png", round))?,
            qr_left: Asset::read(dir, "qr_left.png".to_string())?,
            qr_right: Asset::read(dir, "qr_right.png".to_string())?,
            stylesheet,
        })
    }

    fn images(&self) -> [&Asset; 5] {
        [
            &self.logo,
            &self.background,
            &self.round_banner,
            &self.qr_left,
            &self.qr_right,
        ]
    }

    /// Copies the bundle into `<output_dir>/assets/` for linked cards.
    pub fn write_linked(&self, output_dir: &Path) -> std::io::Result<()> {
        let dir = output_dir.join(LINKED_ASSETS_DIR);
        std::fs::create_dir_all(&dir)?;
        for asset in self.images() {
            std::fs::write(dir.join(&asset.file_name), &asset.bytes)?;
        }
        std::fs::write(dir.join(STYLESHEET_FILE), &self.stylesheet)
    }
}

/// Asset references handed to the card template.
///
/// Image fields are `None` when the run has no assets directory.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CardAssets {
    pub logo: Option<String>,
    pub background: Option<String>,
    pub round_banner: Option<String>,
    pub qr_left: Option<String>,
    pub qr_right: Option<String>,
    pub style_inline: Option<String>,
    pub style_href: Option<String>,
}

impl CardAssets {
    /// References for a run without an assets directory.
    pub fn builtin() -> Self {
        Self {
            style_inline: Some(BUILTIN_STYLESHEET.to_string()),
            ..Default::default()
        }
    }

    /// Encodes or links a loaded bundle. Encoding happens once here and is
    /// reused for every card in the run.
    pub fn from_bundle(bundle: &AssetBundle, mode: AssetMode) -> Self {
        let (style_inline, style_href) = match mode {
            AssetMode::Embed => (Some(bundle.stylesheet.clone()), None),
            AssetMode::Link => (None, Some(format!("{}/{}", LINKED_ASSETS_DIR, STYLESHEET_FILE))),
        };

        Self {
            logo: Some(bundle.logo.reference(mode)),
            background: Some(bundle.background.reference(mode)),
            round_banner: Some(bundle.round_banner.reference(mode)),
            qr_left: Some(bundle.qr_left.reference(mode)),
            qr_right: Some(bundle.qr_right.reference(mode)),
            style_inline,
            style_href,
        }
    }
}
