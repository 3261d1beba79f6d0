// src/services/mod.rs

//! Leaf services: entry location, paginated discovery, redirect probing and
//! metadata extraction.

mod crawler;
mod extractor;
mod locator;
mod resolver;

pub use crawler::{Discovery, PageCrawler};
pub use extractor::MetadataExtractor;
pub use locator::EntryLocator;
pub use resolver::RedirectResolver;
