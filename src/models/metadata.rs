//! Harvested metadata and the run manifest.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Structured fields scraped from an entry's landing page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Metadata {
    /// Normalized tag list, document order, usage counts stripped
    pub tags: Vec<String>,

    /// Entry title
    pub title: String,

    /// One-paragraph summary
    pub summary: String,

    /// Author display name
    pub author: String,

    /// Link to the author's profile page
    pub author_url: String,

    /// Original submission date as shown on the page
    pub date_submitted: String,

    /// Last update date; equals `date_submitted` when the page carries no
    /// distinct update marker
    pub date_updated: String,
}

/// Manifest record for one successfully harvested entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestRecord {
    /// Entry name (destination subdirectory)
    pub name: String,

    /// Landing URL the entry was harvested from
    pub url: String,

    #[serde(flatten)]
    pub metadata: Metadata,
}

/// Aggregated, write-once output of a harvest run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    pub projects: Vec<ManifestRecord>,
}

impl Manifest {
    /// File name of the manifest under the destination root.
    pub const FILE_NAME: &'static str = "manifest.json";

    /// Append a record in discovery order.
    pub fn push(&mut self, record: ManifestRecord) {
        self.projects.push(record);
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Serialize the manifest as pretty-printed JSON to `path`.
    pub async fn write(&self, path: &Path) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(self)?;
        tokio::fs::write(path, bytes).await?;
        Ok(())
    }
}
