use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_AUTHORIZE_URL: &str = "https://www.inoreader.com/oauth2/auth";
pub const DEFAULT_TOKEN_URL: &str = "https://www.inoreader.com/oauth2/token";
pub const DEFAULT_API_BASE: &str = "https://www.inoreader.com/reader/api/0";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// OAuth client registration supplied by the operator.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub authorize_url: String,
    pub token_url: String,
    pub api_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            authorize_url: DEFAULT_AUTHORIZE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

/// Everything the feed side needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub endpoints: Endpoints,
    pub token_path: PathBuf,
    pub request_timeout: Duration,
}

impl Config {
    pub fn new(credentials: Credentials, token_path: PathBuf) -> Self {
        Self {
            credentials,
            endpoints: Endpoints::default(),
            token_path,
            request_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Build the HTTP client shared by the token endpoint and the feed API.
    pub fn http_client(&self) -> Result<reqwest::Client, crate::FeedFilterError> {
        crate::http::build_client(self.request_timeout)
    }
}
