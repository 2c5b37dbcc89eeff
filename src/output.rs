//! Writing card documents to the output directory.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
#[error("failed to write {path}: {source}")]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Creates the output directory if it is missing.
///
/// An existing directory is reused as is; its contents are never touched.
/// Returns whether the directory was created by this call.
pub fn ensure_output_dir(dir: &Path) -> io::Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(dir)?;
    Ok(true)
}

/// File name of the `number`th card, counting from 1.
pub fn card_file_name(number: usize) -> String {
    format!("card_{}.html", number)
}

/// Writes one card and returns its path.
pub fn write_card(dir: &Path, number: usize, html: &str) -> Result<PathBuf, WriteError> {
    let path = dir.join(card_file_name(number));
    std::fs::write(&path, html).map_err(|source| WriteError {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
