// src/services/crawler.rs

//! Paginated discovery of catalog entries.
//!
//! Listing pages are fetched on demand, starting at page 1 and counting up
//! without bound. Discovery ends when a page fetch fails, a page carries no
//! recognizable entries, or the requested count has been yielded.

use std::collections::VecDeque;

use scraper::{Html, Selector};

use crate::error::{HarvestError, Result};
use crate::models::{CatalogConfig, Entry, SortOrder};
use crate::services::EntryLocator;
use crate::utils::http;

/// Crawls listing pages and yields entries in catalog order.
pub struct PageCrawler {
    client: reqwest::Client,
    config: CatalogConfig,
    locator: EntryLocator,
    title_selector: Selector,
    anchor_selector: Selector,
}

impl PageCrawler {
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let client = http::following_client(&config)?;
        Self::with_client(config, client)
    }

    /// Create a crawler around an existing client.
    pub fn with_client(config: CatalogConfig, client: reqwest::Client) -> Result<Self> {
        Ok(Self {
            locator: EntryLocator::new(&config),
            title_selector: parse_selector("p.file_title")?,
            anchor_selector: parse_selector("a")?,
            client,
            config,
        })
    }

    /// Start a discovery pass. Entries are produced on demand; the sequence
    /// is finite once `max_count` entries have been yielded.
    pub fn discover(&self, sort: SortOrder, max_count: usize) -> Discovery<'_> {
        Discovery {
            crawler: self,
            sort,
            remaining: max_count,
            page: 1,
            buffer: VecDeque::new(),
            exhausted: false,
        }
    }

    /// Fetch one listing page and parse its entry references.
    async fn fetch_listing(&self, page: u32, sort: SortOrder) -> Result<Vec<Entry>> {
        let body = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("page", page.to_string().as_str()),
                ("term", &self.config.type_filter),
                ("sort", sort.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(self.parse_listing(&body))
    }

    /// Pull entry references out of a listing page body, document order.
    fn parse_listing(&self, html: &str) -> Vec<Entry> {
        let document = Html::parse_document(html);
        let mut entries = Vec::new();
        for title in document.select(&self.title_selector) {
            let Some(anchor) = title.select(&self.anchor_selector).next() else {
                continue;
            };
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            match self.locator.locate(href) {
                Ok(entry) => entries.push(entry),
                Err(error) => log::warn!("Skipping unusable reference '{href}': {error}"),
            }
        }
        entries
    }
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| HarvestError::selector(s, format!("{e:?}")))
}

/// On-demand entry sequence produced by [`PageCrawler::discover`].
pub struct Discovery<'a> {
    crawler: &'a PageCrawler,
    sort: SortOrder,
    remaining: usize,
    page: u32,
    buffer: VecDeque<Entry>,
    exhausted: bool,
}

impl Discovery<'_> {
    /// Yield the next entry, fetching further listing pages as needed.
    pub async fn next(&mut self) -> Option<Entry> {
        loop {
            if self.remaining == 0 {
                return None;
            }
            if let Some(entry) = self.buffer.pop_front() {
                self.remaining -= 1;
                return Some(entry);
            }
            if self.exhausted {
                return None;
            }
            match self.crawler.fetch_listing(self.page, self.sort).await {
                Ok(entries) if entries.is_empty() => {
                    log::debug!("Listing page {} has no entries; stopping", self.page);
                    self.exhausted = true;
                }
                Ok(entries) => {
                    self.buffer.extend(entries);
                    self.page += 1;
                }
                Err(error) => {
                    // There is no reliable way to resume pagination past an
                    // unreachable page, so a failed fetch ends discovery.
                    log::warn!("Listing page {} failed: {error}; stopping", self.page);
                    self.exhausted = true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
        <html><body>
          <p class="file_title"><a href="/111-alpha">Alpha</a></p>
          <p class="file_title"><a href="222-beta">Beta</a></p>
          <p class="file_title">no anchor here</p>
          <p class="other"><a href="/999-ignored">Ignored</a></p>
        </body></html>
    "#;

    fn crawler() -> PageCrawler {
        PageCrawler::new(CatalogConfig::default()).unwrap()
    }

    #[test]
    fn parse_listing_keeps_document_order() {
        let entries = crawler().parse_listing(LISTING);
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["111-alpha", "222-beta"]);
    }

    #[test]
    fn parse_listing_ignores_unmarked_paragraphs() {
        let entries = crawler().parse_listing(LISTING);
        assert!(entries.iter().all(|e| e.name != "999-ignored"));
    }

    #[test]
    fn parse_listing_of_empty_body_is_empty() {
        assert!(crawler().parse_listing("<html><body></body></html>").is_empty());
    }
}
