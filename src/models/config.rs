//! Catalog configuration and sort orders.

use std::time::Duration;

use clap::ValueEnum;

/// Immutable description of the catalog instance being harvested.
///
/// Built once at startup and passed into the services; tests point it at a
/// local mock server instead of the live catalog.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog, without a trailing slash. Doubles as the
    /// listing endpoint and as the prefix of every landing URL.
    pub base_url: String,

    /// User-Agent header for HTTP requests
    pub user_agent: String,

    /// Timeout applied to every network call
    pub timeout: Duration,

    /// Server-side result type filter for listing pages
    pub type_filter: String,
}

impl CatalogConfig {
    /// Create a configuration for a catalog rooted at `base_url`, with
    /// default request settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "http://www.mathworks.com/matlabcentral/fileexchange".to_string(),
            user_agent: "Mozilla/5.0 (compatible; fex-harvest/0.1)".to_string(),
            timeout: Duration::from_secs(5),
            type_filter: "type:Function".to_string(),
        }
    }
}

/// Server-side sort orders accepted by the catalog's listing endpoint.
/// The CLI tokens are the exact strings the catalog expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    #[default]
    #[value(name = "downloads_desc")]
    DownloadsDesc,
    #[value(name = "downloads_asc")]
    DownloadsAsc,
    #[value(name = "date_desc_updated")]
    DateDescUpdated,
    #[value(name = "date_asc_updated")]
    DateAscUpdated,
    #[value(name = "date_desc_submitted")]
    DateDescSubmitted,
    #[value(name = "date_asc_submitted")]
    DateAscSubmitted,
    #[value(name = "comments_desc")]
    CommentsDesc,
    #[value(name = "comments_asc")]
    CommentsAsc,
    #[value(name = "ratings_desc")]
    RatingsDesc,
    #[value(name = "ratings_asc")]
    RatingsAsc,
}

impl SortOrder {
    /// The token the catalog expects in the `sort` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::DownloadsDesc => "downloads_desc",
            SortOrder::DownloadsAsc => "downloads_asc",
            SortOrder::DateDescUpdated => "date_desc_updated",
            SortOrder::DateAscUpdated => "date_asc_updated",
            SortOrder::DateDescSubmitted => "date_desc_submitted",
            SortOrder::DateAscSubmitted => "date_asc_submitted",
            SortOrder::CommentsDesc => "comments_desc",
            SortOrder::CommentsAsc => "comments_asc",
            SortOrder::RatingsDesc => "ratings_desc",
            SortOrder::RatingsAsc => "ratings_asc",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
