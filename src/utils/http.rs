// src/utils/http.rs

//! HTTP client construction and page fetching.

use scraper::Html;

use crate::error::Result;
use crate::models::CatalogConfig;

/// Create the client used for listing pages, landing pages and payload
/// downloads. Follows redirects normally.
pub fn following_client(config: &CatalogConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(config.timeout)
        .build()?;
    Ok(client)
}

/// Create the client used for redirect probes. Never follows redirects, so
/// the `Location` header stays observable.
pub fn probe_client(config: &CatalogConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(config.timeout)
        .redirect(reqwest::redirect::Policy::none())
        .build()?;
    Ok(client)
}

/// Fetch a page and parse it as HTML.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<Html> {
    let text = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(Html::parse_document(&text))
}
