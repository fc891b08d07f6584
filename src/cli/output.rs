use colored::Colorize;

use crate::error::FeedFilterError;
use crate::feed::Folder;
use crate::types::Headline;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Pretty,
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputMode::Json
        } else {
            OutputMode::Pretty
        }
    }
}

/// Render one headline as a pretty line (or two for feed items).
pub fn format_headline(headline: &Headline, is_tty: bool) -> String {
    let link = headline.link.as_deref().unwrap_or("No link");
    let link = if is_tty {
        link.underline().to_string()
    } else {
        link.to_string()
    };
    match &headline.label {
        Some(label) => {
            let label = if is_tty {
                label.bold().to_string()
            } else {
                label.clone()
            };
            format!("{label}: {} - Link: {link}", headline.text)
        }
        None => {
            let text = if is_tty {
                headline.text.bold().to_string()
            } else {
                headline.text.clone()
            };
            format!("Title: {text}\nLink: {link}\n")
        }
    }
}

pub fn print_headlines(headlines: &[Headline], mode: OutputMode, is_tty: bool) {
    match mode {
        OutputMode::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(headlines).unwrap_or_default()
            );
        }
        OutputMode::Pretty => {
            if headlines.is_empty() {
                println!("No headlines matched the keywords");
                return;
            }
            let summary = format!(
                "Found {} headline{} matching the keywords:",
                headlines.len(),
                if headlines.len() == 1 { "" } else { "s" }
            );
            if is_tty {
                println!("{}", summary.green());
            } else {
                println!("{summary}");
            }
            for headline in headlines {
                println!("{}", format_headline(headline, is_tty));
            }
        }
    }
}

pub fn print_folders(folders: &[Folder]) {
    for folder in folders {
        println!("{}: {}", folder.key, folder.name());
    }
}

pub fn print_error(err: &FeedFilterError, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&err.to_json()).unwrap_or_default());
    } else {
        eprintln!("Error: {}", err);
    }
}
