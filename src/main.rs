// src/main.rs

//! fex-harvest: catalog harvester CLI.
//!
//! Thin shell around the harvest pipeline: parses options, runs the
//! pipeline and writes the manifest under the destination root.

use std::path::PathBuf;

use clap::Parser;

use fex_harvest::error::Result;
use fex_harvest::models::{CatalogConfig, Manifest, SortOrder};
use fex_harvest::pipeline::{HarvestOptions, HarvestPipeline};

#[derive(Parser, Debug)]
#[command(
    name = "fex-harvest",
    version,
    about = "Download projects from the MATLAB Central File Exchange"
)]
struct Cli {
    /// Number of entries to fetch
    #[arg(short = 'n', long, default_value_t = 10)]
    count: usize,

    /// Server-side sort order for listing pages
    #[arg(short, long, value_enum, default_value_t = SortOrder::DownloadsDesc)]
    sort: SortOrder,

    /// Directory to harvest into
    #[arg(short, long, default_value = ".")]
    dest: PathBuf,

    /// Save archives verbatim instead of expanding them
    #[arg(long)]
    no_expand: bool,

    /// Base URL of the catalog instance (defaults to the live catalog)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = match cli.base_url {
        Some(base_url) => CatalogConfig::new(base_url),
        None => CatalogConfig::default(),
    };

    tokio::fs::create_dir_all(&cli.dest).await?;

    let pipeline = HarvestPipeline::new(config)?;
    let options = HarvestOptions {
        sort: cli.sort,
        max_count: cli.count,
        dest_root: cli.dest.clone(),
        expand_archives: !cli.no_expand,
    };
    let outcome = pipeline.run(&options).await?;

    let manifest_path = cli.dest.join(Manifest::FILE_NAME);
    outcome.manifest.write(&manifest_path).await?;

    log::info!(
        "Harvested {}/{} entries ({} skipped), manifest at {}",
        outcome.stats.harvested,
        outcome.stats.attempted,
        outcome.stats.skipped,
        manifest_path.display()
    );
    Ok(())
}
