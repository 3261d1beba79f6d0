//! Utility functions and helpers.

pub mod http;

use url::Url;

use crate::error::Result;

/// Last non-empty path segment of a URL-like string.
pub fn last_segment(url: &str) -> &str {
    url.trim_end_matches('/').rsplit('/').next().unwrap_or("")
}

/// Resolve a redirect `Location` value against the URL that produced it.
/// The catalog normally gives absolute locations, but relative ones are
/// legal per RFC 7231.
pub fn resolve_location(origin: &str, location: &str) -> Result<String> {
    let base = Url::parse(origin)?;
    Ok(base.join(location)?.to_string())
}
