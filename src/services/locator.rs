// src/services/locator.rs

//! Entry construction from raw references.

use crate::error::{HarvestError, Result};
use crate::models::{CatalogConfig, Entry};
use crate::utils;

/// Builds canonical entries from raw references.
///
/// Pure string construction; never touches the network.
#[derive(Debug, Clone)]
pub struct EntryLocator {
    base_url: String,
}

impl EntryLocator {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the canonical entry for a raw reference.
    ///
    /// References already carrying the catalog prefix are used as-is;
    /// anything else is joined onto the base URL with a single separator.
    pub fn locate(&self, reference: &str) -> Result<Entry> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(HarvestError::InvalidReference(reference.to_string()));
        }

        let landing_url = if reference.starts_with(&self.base_url) {
            reference.to_string()
        } else {
            format!("{}/{}", self.base_url, reference.trim_start_matches('/'))
        };
        // Canonical form carries no trailing slash.
        let landing_url = landing_url.trim_end_matches('/').to_string();

        let name = utils::last_segment(&landing_url).to_string();
        if name.is_empty() || landing_url == self.base_url {
            return Err(HarvestError::InvalidReference(reference.to_string()));
        }

        Ok(Entry {
            reference: reference.to_string(),
            landing_url,
            name,
        })
    }
}
