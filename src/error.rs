#[derive(Debug, thiserror::Error)]
pub enum FeedFilterError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("State in the redirect does not match this authorization attempt. Possible CSRF; start the authorization again.")]
    StateMismatch,

    #[error("{}", format_missing_code(.error.as_deref()))]
    MissingCode { error: Option<String> },

    #[error("Token endpoint returned status {status}: {body}")]
    AuthError { status: u16, body: String },

    #[error("No stored token to refresh. Run: feedfilter auth")]
    AuthRequired,

    #[error("Request failed with status {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("Transport error: {0}")]
    TransportError(Box<dyn std::error::Error + Send + Sync>),

    #[error("OAuth error: {0}")]
    OAuthError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

fn format_missing_code(error: Option<&str>) -> String {
    match error {
        Some(e) => format!("No authorization code in the redirect (provider returned: {e})"),
        None => "No authorization code in the redirect".to_string(),
    }
}

impl From<reqwest::Error> for FeedFilterError {
    fn from(e: reqwest::Error) -> Self {
        FeedFilterError::TransportError(Box::new(e))
    }
}

impl FeedFilterError {
    /// Error code string for structured JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            FeedFilterError::ConfigError(_) => "config_error",
            FeedFilterError::StateMismatch => "state_mismatch",
            FeedFilterError::MissingCode { .. } => "missing_code",
            FeedFilterError::AuthError { .. } => "auth_error",
            FeedFilterError::AuthRequired => "auth_required",
            FeedFilterError::HttpError { .. } => "http_error",
            FeedFilterError::TransportError(_) => "transport_error",
            FeedFilterError::OAuthError(_) => "oauth_error",
            FeedFilterError::ParseError(_) => "parse_error",
            FeedFilterError::IoError(_) => "io_error",
        }
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            FeedFilterError::AuthError { status, .. } => Some(*status),
            FeedFilterError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, FeedFilterError::HttpError { status: 401, .. })
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::Map::new();
        if let Some(status) = self.status() {
            obj.insert("status".into(), serde_json::Value::from(status));
        }
        obj.insert("message".into(), serde_json::Value::String(self.to_string()));
        obj.insert("code".into(), serde_json::Value::String(self.code().to_string()));
        serde_json::json!({ "error": obj })
    }
}
