use reqwest::Url;

use crate::config::{Credentials, Endpoints};
use crate::error::FeedFilterError;

pub const SCOPE: &str = "read";

/// Anti-CSRF value round-tripped through the authorization redirect.
///
/// A UUID v4 carries 122 random bits. Each authorization attempt gets a new
/// one and it is compared exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateNonce(String);

impl StateNonce {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Authorization code returned by the provider; only good for one exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationCode(String);

impl AuthorizationCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    pub url: String,
    pub state: StateNonce,
}

impl AuthorizationRequest {
    /// Build the URL the operator opens to grant access.
    pub fn new(
        endpoints: &Endpoints,
        creds: &Credentials,
        state: StateNonce,
    ) -> Result<Self, FeedFilterError> {
        let mut url = Url::parse(&endpoints.authorize_url).map_err(|e| {
            FeedFilterError::ConfigError(format!(
                "Invalid authorization URL '{}': {e}",
                endpoints.authorize_url
            ))
        })?;
        url.query_pairs_mut()
            .append_pair("client_id", &creds.client_id)
            .append_pair("redirect_uri", &creds.redirect_uri)
            .append_pair("response_type", "code")
            .append_pair("scope", SCOPE)
            .append_pair("state", state.as_str());

        Ok(Self {
            url: url.into(),
            state,
        })
    }
}

/// Extract the authorization code from the redirect URL the operator pasted.
///
/// The `state` parameter must equal `expected_state` byte for byte; a missing
/// or empty state fails the same way. Input that does not parse as a URL has
/// no parameters at all and so fails the state check.
pub fn complete_authorization(
    redirect_url: &str,
    expected_state: &str,
) -> Result<AuthorizationCode, FeedFilterError> {
    let mut state = None;
    let mut code = None;
    let mut error = None;

    if let Ok(url) = Url::parse(redirect_url.trim()) {
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "state" if state.is_none() => state = Some(value.into_owned()),
                "code" if code.is_none() => code = Some(value.into_owned()),
                "error" if error.is_none() => error = Some(value.into_owned()),
                _ => {}
            }
        }
    }

    match state.as_deref() {
        Some(received) if !received.is_empty() && received == expected_state => {}
        _ => {
            tracing::warn!("authorization redirect state does not match");
            return Err(FeedFilterError::StateMismatch);
        }
    }

    match code {
        Some(code) if !code.is_empty() => Ok(AuthorizationCode(code)),
        _ => Err(FeedFilterError::MissingCode { error }),
    }
}
