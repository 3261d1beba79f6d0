// src/error.rs

//! Unified error handling for the harvester.

use thiserror::Error;

/// Result type alias for harvest operations.
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Unified harvester error type.
#[derive(Error, Debug)]
pub enum HarvestError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed (connection failure, timeout, bad status)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// A raw reference did not yield a usable entry name
    #[error("Invalid entry reference '{0}'")]
    InvalidReference(String),

    /// The download probe did not answer with a redirect
    #[error("No redirect from {url} (status {status})")]
    NoRedirect { url: String, status: u16 },

    /// The fetched bytes were not a readable archive
    #[error("Corrupt archive: {0}")]
    CorruptArchive(#[from] zip::result::ZipError),

    /// A required structural anchor is absent from a landing page
    #[error("Malformed landing page: missing {missing}")]
    MalformedPage { missing: &'static str },
}

impl HarvestError {
    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a malformed-page error naming the missing anchor.
    pub fn malformed(missing: &'static str) -> Self {
        Self::MalformedPage { missing }
    }
}
