// src/services/resolver.rs

//! Redirect probing for real download locations.

use crate::error::{HarvestError, Result};
use crate::models::{CatalogConfig, DownloadTarget, Entry};
use crate::utils::{self, http};

/// Resolves an entry's download trigger to the URL it actually points to.
///
/// The probe never follows the redirect; following it would hide the real
/// filename, which is what decides archive-vs-raw handling downstream.
pub struct RedirectResolver {
    client: reqwest::Client,
}

impl RedirectResolver {
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        Ok(Self {
            client: http::probe_client(config)?,
        })
    }

    /// Probe the entry's download trigger and read the redirect target.
    pub async fn resolve(&self, entry: &Entry) -> Result<DownloadTarget> {
        let probe_url = format!("{}?download=true", entry.landing_url);
        let response = self.client.get(&probe_url).send().await?;
        let status = response.status();

        let location = response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .filter(|_| status.is_redirection())
            .map(str::to_string);
        let Some(location) = location else {
            return Err(HarvestError::NoRedirect {
                url: entry.landing_url.clone(),
                status: status.as_u16(),
            });
        };

        let real_url = utils::resolve_location(&entry.landing_url, &location)?;
        let filename = utils::last_segment(&real_url).to_string();
        if filename.is_empty() {
            return Err(HarvestError::InvalidReference(real_url));
        }

        Ok(DownloadTarget { real_url, filename })
    }
}
