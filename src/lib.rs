// src/lib.rs

//! fex-harvest library
//!
//! Harvests entries from a paginated web catalog: paginated discovery,
//! metadata extraction, redirect-aware download, archive-safe extraction
//! and manifest aggregation.

pub mod archive;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
