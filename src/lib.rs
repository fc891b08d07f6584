pub mod cli;
pub mod config;
pub mod error;
pub mod feed;
pub mod filter;
pub mod http;
pub mod oauth;
pub mod runtime;
pub mod scrape;
pub mod types;

pub use config::{load_config, Config, Credentials, Endpoints};
pub use error::FeedFilterError;
pub use feed::FeedClient;
pub use filter::{filter_headlines, parse_keywords};
pub use oauth::{AuthorizationFlow, TokenPair, TokenStore, UserInteraction};
pub use runtime::Runtime;
pub use types::{FeedItem, Headline};
