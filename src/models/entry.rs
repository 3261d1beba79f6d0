//! Entry and download-target data.

/// One catalog listing to be harvested.
///
/// Constructed once at discovery time and immutable afterwards; only the
/// derived manifest record outlives the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Raw reference the entry was constructed from (URL or bare identifier)
    pub reference: String,

    /// Canonical absolute URL of the entry's detail page
    pub landing_url: String,

    /// Final path segment of `landing_url`; stable identifier and
    /// destination subdirectory name
    pub name: String,
}

/// Where an entry's download trigger actually points.
///
/// Computed per entry from the redirect probe and discarded after the
/// download step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    /// The URL the catalog's redirect points to
    pub real_url: String,

    /// Last path segment of `real_url`
    pub filename: String,
}

impl DownloadTarget {
    /// Whether the payload should be treated as an archive.
    pub fn is_archive(&self) -> bool {
        self.filename.ends_with(".zip")
    }
}
