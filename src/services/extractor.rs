// src/services/extractor.rs

//! Landing-page metadata extraction.
//!
//! Depends on the catalog's fixed, undocumented-but-stable DOM shape: the
//! tag container, the details block and its children. A missing anchor means
//! the page structure changed and surfaces as `MalformedPage`.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::{HarvestError, Result};
use crate::models::Metadata;

/// Extracts structured metadata from an entry landing page.
pub struct MetadataExtractor {
    tag_pattern: Regex,
    tags: Selector,
    tag_anchor: Selector,
    details: Selector,
    title: Selector,
    summary: Selector,
    author: Selector,
    submission_date: Selector,
    updated_date: Selector,
}

impl MetadataExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            // Leading word run, optional trailing parenthesized usage count.
            tag_pattern: Regex::new(r"^[\w\s]+").expect("tag pattern is valid"),
            tags: parse_selector("div#all_tags")?,
            tag_anchor: parse_selector("a")?,
            details: parse_selector("div#details")?,
            title: parse_selector("h1")?,
            summary: parse_selector("p#summary")?,
            author: parse_selector("p#author a")?,
            submission_date: parse_selector("span#submissiondate")?,
            updated_date: parse_selector(r#"span[itemprop="datePublished"]"#)?,
        })
    }

    /// Extract all metadata fields from a parsed landing page.
    pub fn extract(&self, document: &Html) -> Result<Metadata> {
        let tags_div = document
            .select(&self.tags)
            .next()
            .ok_or(HarvestError::malformed("div#all_tags"))?;
        let tags = tags_div
            .select(&self.tag_anchor)
            .filter_map(|anchor| self.normalize_tag(&element_text(anchor)))
            .collect();

        let details = document
            .select(&self.details)
            .next()
            .ok_or(HarvestError::malformed("div#details"))?;
        let title = details
            .select(&self.title)
            .next()
            .ok_or(HarvestError::malformed("#details h1"))?;
        let summary = details
            .select(&self.summary)
            .next()
            .ok_or(HarvestError::malformed("p#summary"))?;
        let author = details
            .select(&self.author)
            .next()
            .ok_or(HarvestError::malformed("p#author a"))?;
        let submitted = details
            .select(&self.submission_date)
            .next()
            .ok_or(HarvestError::malformed("span#submissiondate"))?;

        let date_submitted = element_text(submitted);
        // The update marker is only present once an entry has been revised.
        let date_updated = details
            .select(&self.updated_date)
            .next()
            .map(element_text)
            .unwrap_or_else(|| date_submitted.clone());

        Ok(Metadata {
            tags,
            title: element_text(title),
            summary: element_text(summary),
            author: element_text(author),
            author_url: author.value().attr("href").unwrap_or("").to_string(),
            date_submitted,
            date_updated,
        })
    }

    /// Normalize one raw tag token: keep the leading word run, drop a
    /// trailing parenthesized usage count. Tokens that do not match are
    /// dropped by the caller.
    pub fn normalize_tag(&self, raw: &str) -> Option<String> {
        let matched = self.tag_pattern.find(raw.trim())?;
        let tag = matched.as_str().trim();
        (!tag.is_empty()).then(|| tag.to_string())
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| HarvestError::selector(s, format!("{e:?}")))
}
