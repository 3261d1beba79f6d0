// src/pipeline/harvest.rs

//! The harvest pipeline: discovery through manifest accumulation.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::archive::ArchiveExpander;
use crate::error::Result;
use crate::models::{CatalogConfig, Entry, Manifest, ManifestRecord, SortOrder};
use crate::services::{MetadataExtractor, PageCrawler, RedirectResolver};
use crate::utils::http;

/// Everything a harvest run needs to know.
#[derive(Debug, Clone)]
pub struct HarvestOptions {
    /// Server-side sort order for discovery
    pub sort: SortOrder,

    /// Maximum number of entries to process
    pub max_count: usize,

    /// Directory that receives one subdirectory per entry
    pub dest_root: PathBuf,

    /// Expand `.zip` payloads in place; when false they are saved verbatim
    pub expand_archives: bool,
}

/// Summary of a harvest run.
#[derive(Debug, Clone, Serialize)]
pub struct HarvestStats {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub attempted: usize,
    pub harvested: usize,
    pub skipped: usize,
}

/// Result of a harvest run.
#[derive(Debug)]
pub struct HarvestOutcome {
    pub manifest: Manifest,
    pub stats: HarvestStats,
}

/// Orchestrates discovery, download and extraction for one catalog.
///
/// Entries are processed strictly one at a time. A failure in any per-entry
/// stage skips that entry and cleans up after it; only a failed listing
/// fetch ends discovery early, and nothing aborts the run.
pub struct HarvestPipeline {
    client: reqwest::Client,
    crawler: PageCrawler,
    resolver: RedirectResolver,
    extractor: MetadataExtractor,
}

impl HarvestPipeline {
    pub fn new(config: CatalogConfig) -> Result<Self> {
        Ok(Self {
            client: http::following_client(&config)?,
            resolver: RedirectResolver::new(&config)?,
            extractor: MetadataExtractor::new()?,
            crawler: PageCrawler::new(config)?,
        })
    }

    /// Run a full harvest and accumulate the manifest.
    pub async fn run(&self, options: &HarvestOptions) -> Result<HarvestOutcome> {
        let start_time = Utc::now();
        let mut manifest = Manifest::default();
        let mut attempted = 0;

        let mut discovery = self.crawler.discover(options.sort, options.max_count);
        while let Some(entry) = discovery.next().await {
            attempted += 1;
            log::info!("Harvesting {}...", entry.name);
            match self.harvest_entry(&entry, options).await {
                Ok(record) => manifest.push(record),
                Err(error) => {
                    log::warn!("Skipping {}: {error}", entry.name);
                    discard_partial(&entry, &options.dest_root).await;
                }
            }
        }

        let stats = HarvestStats {
            start_time,
            end_time: Utc::now(),
            attempted,
            harvested: manifest.len(),
            skipped: attempted - manifest.len(),
        };
        Ok(HarvestOutcome { manifest, stats })
    }

    /// Describe, resolve, download and expand a single entry.
    async fn harvest_entry(
        &self,
        entry: &Entry,
        options: &HarvestOptions,
    ) -> Result<ManifestRecord> {
        let metadata = {
            let page = http::fetch_page(&self.client, &entry.landing_url).await?;
            self.extractor.extract(&page)?
        };

        let target = self.resolver.resolve(entry).await?;
        let payload = self
            .client
            .get(&target.real_url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let dest = options.dest_root.join(&entry.name);
        tokio::fs::create_dir_all(&dest).await?;
        if options.expand_archives && target.is_archive() {
            ArchiveExpander::expand(&payload, &dest)?;
        } else {
            tokio::fs::write(dest.join(&target.filename), &payload).await?;
        }

        Ok(ManifestRecord {
            name: entry.name.clone(),
            url: entry.landing_url.clone(),
            metadata,
        })
    }
}

/// Remove whatever a failed entry left behind, so a skipped entry leaves no
/// partial directory.
async fn discard_partial(entry: &Entry, dest_root: &Path) {
    let dir = dest_root.join(&entry.name);
    match tokio::fs::remove_dir_all(&dir).await {
        Ok(()) => {}
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
        Err(error) => log::warn!("Could not clean up {}: {error}", dir.display()),
    }
}
