use std::io::IsTerminal;
use std::time::Duration;

use crate::error::FeedFilterError;
use crate::filter::{filter_headlines, parse_keywords};
use crate::http::build_client;
use crate::scrape::fetch_headings;

use super::output::{print_headlines, OutputMode};
use super::prompt::value_or_prompt;

/// Run the scrape command.
pub async fn run_scrape(
    url: Option<String>,
    keywords: Option<String>,
    limit: usize,
    json: bool,
    timeout: Duration,
) -> Result<(), FeedFilterError> {
    let url = value_or_prompt(url, "Web page URL: ")?;
    let keywords = parse_keywords(&value_or_prompt(
        keywords,
        "Keywords to filter by (comma-separated): ",
    )?);

    let client = build_client(timeout)?;
    let headings = fetch_headings(&client, &url, limit).await?;
    tracing::info!(found = headings.len(), "extracted headings");

    let matched = filter_headlines(headings, &keywords);
    print_headlines(
        &matched,
        OutputMode::from_json_flag(json),
        std::io::stdout().is_terminal(),
    );
    Ok(())
}
