mod error;
mod fetch;
mod model;
mod parser;
mod patch;
mod render;
mod settings;
mod slug;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use error::BuildError;
use settings::{Overrides, Settings};

#[derive(Parser)]
#[command(
    name = "samples_builder",
    about = "Rebuild the samples page from the wiki's sample applications list"
)]
struct Cli {
    /// Wiki page to scrape (default: the framework's Sample-applications page)
    #[arg(long, global = true)]
    url: Option<String>,
    /// Page to patch in place (default: samples.html)
    #[arg(long, global = true)]
    target: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape the wiki and rewrite the marked regions of the target page (default)
    Build {
        /// Print the patched page to stdout instead of writing it
        #[arg(long)]
        dry_run: bool,
    },
    /// Scrape the wiki and print the parsed categories and samples as JSON
    Dump,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load(&Overrides {
        wiki_url: cli.url,
        target: cli.target,
    })?;

    let result = match cli.command.unwrap_or(Commands::Build { dry_run: false }) {
        Commands::Build { dry_run } => build(&settings, dry_run),
        Commands::Dump => dump(&settings),
    };

    // stdout carries `dump` and `--dry-run` output
    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {}", format_duration(elapsed));
    }

    result
}

/// fetch → parse → render + patch → normalize → write.
fn build(settings: &Settings, dry_run: bool) -> Result<()> {
    let html = fetch::fetch_page(&settings.wiki_url)?;
    let samples = parser::parse_page(&html).context("Failed to parse sample listing")?;

    let path = &settings.target;
    let host = std::fs::read_to_string(path).map_err(|e| BuildError::file_io(path, e))?;
    let page = patch::patch_page(&host, &samples)
        .with_context(|| format!("Failed to patch {}", path.display()))?;

    if dry_run {
        print!("{}", page);
        return Ok(());
    }

    std::fs::write(path, &page).map_err(|e| BuildError::file_io(path, e))?;
    info!("Wrote {} ({} bytes, {} samples)", path.display(), page.len(), samples.len());
    println!("Updated {} with {} samples.", path.display(), samples.len());
    Ok(())
}

fn dump(settings: &Settings) -> Result<()> {
    let html = fetch::fetch_page(&settings.wiki_url)?;
    let samples = parser::parse_page(&html).context("Failed to parse sample listing")?;
    let categories = parser::samples::categories(&samples);

    let out = serde_json::json!({
        "categories": categories,
        "samples": samples,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

// ── Tests ──
