// src/models/mod.rs

//! Domain models for the harvester.

mod config;
mod entry;
mod metadata;

// Re-export all public types
pub use config::{CatalogConfig, SortOrder};
pub use entry::{DownloadTarget, Entry};
pub use metadata::{Manifest, ManifestRecord, Metadata};
