pub mod auth;
pub mod feed;
pub mod output;
pub mod prompt;
pub mod scrape;
