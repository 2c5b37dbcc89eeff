//! Generate command - write one HTML file per unique card layout.

use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::assets::{AssetBundle, AssetMode, CardAssets};
use crate::error_fmt::{AppError, IoResultExt};
use crate::layout;
use crate::output::{self, WriteError};
use crate::render::CardRenderer;
use crate::request::CardRequest;

/// Run options that don't come from the form itself.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub output_dir: PathBuf,
    pub assets_dir: Option<PathBuf>,
    pub asset_mode: AssetMode,
    pub title: String,
    /// Fixed seed for reproducible layouts. Fresh OS entropy when unset.
    pub seed: Option<u64>,
    pub verbose: bool,
}

/// Outcome of a successful run.
#[derive(Debug)]
pub struct GenerateSummary {
    pub output_dir: PathBuf,
    pub created_dir: bool,
    pub written: Vec<PathBuf>,
}

/// Generate `request.copies` unique cards into the output directory.
///
/// Assets are read before anything is written, so a missing asset leaves
/// the output directory untouched. A failed card write stops the batch;
/// cards written before it stay on disk.
pub fn generate(request: &CardRequest, opts: &GenerateOptions) -> Result<GenerateSummary, AppError> {
    let bundle = match &opts.assets_dir {
        Some(dir) => Some(AssetBundle::load(dir, request.round)?),
        None => None,
    };
    let assets = match &bundle {
        Some(bundle) => CardAssets::from_bundle(bundle, opts.asset_mode),
        None => CardAssets::builtin(),
    };
    let renderer = CardRenderer::new(&opts.title, request.round, assets)?;

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let layouts = layout::generate(&request.pool, request.copies, &mut rng);

    let created_dir = output::ensure_output_dir(&opts.output_dir).with_context(&format!(
        "failed to create directory {}",
        opts.output_dir.display()
    ))?;

    if let Some(bundle) = bundle.as_ref().filter(|_| opts.asset_mode == AssetMode::Link) {
        bundle.write_linked(&opts.output_dir).with_context(&format!(
            "failed to copy assets into {}",
            opts.output_dir.display()
        ))?;
    }

    let mut written = Vec::with_capacity(layouts.len());
    for (index, card) in layouts.iter().enumerate() {
        let number = index + 1;
        let html = renderer.render(card, number)?;
        let path = write_card(&opts.output_dir, number, &html, written.len())?;
        if opts.verbose {
            println!("wrote: {}", path.display());
        }
        written.push(path);
    }

    Ok(GenerateSummary {
        output_dir: opts.output_dir.clone(),
        created_dir,
        written,
    })
}

fn write_card(dir: &Path, number: usize, html: &str, written: usize) -> Result<PathBuf, AppError> {
    output::write_card(dir, number, html).map_err(|error: WriteError| AppError::Write { error, written })
}

/// Print the success notification for a finished run.
pub fn report(summary: &GenerateSummary) {
    if summary.created_dir {
        println!("created directory: {}", summary.output_dir.display());
    }
    println!(
        "created: {} cards in {}",
        summary.written.len().to_string().bright_green().bold(),
        summary.output_dir.display().to_string().bright_green()
    );
}
