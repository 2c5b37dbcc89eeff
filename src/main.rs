use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use bingo::commands::{self, GenerateOptions};
use bingo::error_fmt::AppError;
use bingo::settings::DEFAULT_CONFIG_FILE;
use bingo::AssetMode;

#[derive(Parser)]
#[command(name = "bingo")]
#[command(about = "Generate printable bingo cards with unique layouts")]
struct Cli {
    /// Settings file (defaults apply when it doesn't exist)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

/// Form fields shared by `generate` and `check`
#[derive(Args, Clone)]
struct FormArgs {
    /// Phrase list, one phrase per line ("-" reads stdin)
    #[arg(long, short, default_value = "-")]
    phrases: PathBuf,
    /// Number of cards to generate
    #[arg(long, short, default_value = "1", allow_hyphen_values = true)]
    copies: String,
    /// Round selector, picks the round banner and background
    #[arg(long, short, default_value = "1", allow_hyphen_values = true)]
    round: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one HTML file per unique card
    Generate {
        #[command(flatten)]
        form: FormArgs,
        /// Output directory (created if missing)
        #[arg(long, short)]
        out: Option<PathBuf>,
        /// Directory with logo, round, background, QR and stylesheet assets
        #[arg(long)]
        assets: Option<PathBuf>,
        /// Link assets by relative path instead of embedding them
        #[arg(long)]
        link_assets: bool,
        /// Card title
        #[arg(long, short)]
        title: Option<String>,
        /// Seed for reproducible layouts
        #[arg(long)]
        seed: Option<u64>,
        /// Print every written file
        #[arg(long, short)]
        verbose: bool,
    },
    /// Validate the input without writing anything
    Check {
        #[command(flatten)]
        form: FormArgs,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            form,
            out,
            assets,
            link_assets,
            title,
            seed,
            verbose,
        } => generate_cards(&cli.config, form, out, assets, link_assets, title, seed, verbose),
        Commands::Check { form } => check_input(&cli.config, form),
    };

    if let Err(e) = result {
        eprint!("{}", e);
        std::process::exit(1);
    }
}

#[allow(clippy::too_many_arguments)]
fn generate_cards(
    config: &Path,
    form: FormArgs,
    out: Option<PathBuf>,
    assets: Option<PathBuf>,
    link_assets: bool,
    title: Option<String>,
    seed: Option<u64>,
    verbose: bool,
) -> Result<(), AppError> {
    let (settings, request) = commands::load_request(config, &form.copies, &form.round, &form.phrases)?;

    let asset_mode = if link_assets || !settings.embed_assets {
        AssetMode::Link
    } else {
        AssetMode::Embed
    };

    let opts = GenerateOptions {
        output_dir: out.unwrap_or(settings.output_dir),
        assets_dir: assets.or(settings.assets_dir),
        asset_mode,
        title: title.unwrap_or(settings.title),
        seed,
        verbose,
    };

    let summary = commands::generate(&request, &opts)?;
    commands::report(&summary);
    Ok(())
}

fn check_input(config: &Path, form: FormArgs) -> Result<(), AppError> {
    let (_, request) = commands::load_request(config, &form.copies, &form.round, &form.phrases)?;
    commands::check(&request);
    Ok(())
}
