use reqwest::Url;
use scraper::{ElementRef, Html, Selector};

use crate::error::FeedFilterError;
use crate::http::failure_parts;
use crate::types::Headline;

pub const DEFAULT_LIMIT: usize = 20;

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Fetch a page and extract its headings.
pub async fn fetch_headings(
    client: &reqwest::Client,
    page_url: &str,
    limit: usize,
) -> Result<Vec<Headline>, FeedFilterError> {
    let url = Url::parse(page_url.trim())
        .map_err(|e| FeedFilterError::ConfigError(format!("Invalid page URL '{page_url}': {e}")))?;

    tracing::debug!(url = %url, "fetching page");
    let resp = client.get(url.clone()).send().await?;
    if !resp.status().is_success() {
        let (status, body) = failure_parts(resp).await;
        return Err(FeedFilterError::HttpError { status, body });
    }
    let html = resp.text().await?;

    extract_headings(&html, &url, limit)
}

/// All `h1` headings in document order, then all `h2`, and so on down to
/// `h6`, truncated to `limit`. Each heading takes the first link inside it;
/// links not already on `https://` are resolved against `page_url`.
pub fn extract_headings(
    html: &str,
    page_url: &Url,
    limit: usize,
) -> Result<Vec<Headline>, FeedFilterError> {
    let document = Html::parse_document(html);
    let anchor = selector("a[href]")?;

    let mut headings = Vec::new();
    for tag in HEADING_TAGS {
        let heading = selector(tag)?;
        for element in document.select(&heading) {
            if headings.len() == limit {
                return Ok(headings);
            }
            let link = element
                .select(&anchor)
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(|href| resolve_link(page_url, href));
            headings.push(Headline::new(element_text(&element), link).with_label(tag));
        }
    }
    Ok(headings)
}

fn selector(css: &str) -> Result<Selector, FeedFilterError> {
    Selector::parse(css)
        .map_err(|e| FeedFilterError::ParseError(format!("Invalid selector '{css}': {e}")))
}

fn element_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn resolve_link(page_url: &Url, href: &str) -> String {
    let href = href.trim();
    if href.starts_with("https://") {
        return href.to_string();
    }
    match page_url.join(href) {
        Ok(url) => url.into(),
        Err(_) => href.to_string(),
    }
}
