// src/pipeline/mod.rs

//! Pipeline entry point for harvest runs.

mod harvest;

pub use harvest::{HarvestOptions, HarvestOutcome, HarvestPipeline, HarvestStats};
