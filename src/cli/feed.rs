use std::io::IsTerminal;

use crate::config::Config;
use crate::error::FeedFilterError;
use crate::feed::{find_folder, FOLDERS};
use crate::filter::{filter_headlines, parse_keywords};
use crate::oauth::ConsoleInteraction;
use crate::runtime::Runtime;
use crate::types::Headline;

use super::output::{print_folders, print_headlines, OutputMode};
use super::prompt::value_or_prompt;

/// Run the feed command.
pub async fn run_feed(
    config: &Config,
    folder: Option<String>,
    keywords: Option<String>,
    count: usize,
    json: bool,
) -> Result<(), FeedFilterError> {
    let mut runtime = Runtime::new(config)?;
    runtime.sign_in(&ConsoleInteraction::new()).await?;

    let folder = match folder {
        Some(choice) => choice,
        None => {
            println!("Select a folder:");
            print_folders(FOLDERS);
            value_or_prompt(None, "Folder number: ")?
        }
    };
    let folder = find_folder(&folder)?;
    let keywords = parse_keywords(&value_or_prompt(
        keywords,
        "Keywords to filter by (comma-separated): ",
    )?);

    let items = runtime.fetch(folder.stream_id, count).await?;
    tracing::info!(folder = folder.name(), items = items.len(), "fetched articles");
    if items.is_empty() {
        println!("No articles in folder '{}'", folder.name());
        return Ok(());
    }

    let headlines: Vec<Headline> = items.iter().take(count).map(|item| item.headline()).collect();
    let matched = filter_headlines(headlines, &keywords);
    print_headlines(
        &matched,
        OutputMode::from_json_flag(json),
        std::io::stdout().is_terminal(),
    );
    Ok(())
}

/// Run the folders command.
pub fn run_folders() {
    print_folders(FOLDERS);
}
