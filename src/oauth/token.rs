use serde::{Deserialize, Serialize};

use crate::config::Credentials;
use crate::error::FeedFilterError;
use crate::http::failure_parts;

/// Access and refresh token as persisted between runs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }

    /// Both halves must be present for the pair to be usable.
    pub fn is_valid(&self) -> bool {
        !self.access_token.is_empty() && !self.refresh_token.is_empty()
    }
}

impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// Raw token response from the OAuth server.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    refresh_token: Option<String>,
}

impl TokenResponse {
    fn into_token_pair(self) -> Result<TokenPair, FeedFilterError> {
        match (self.access_token, self.refresh_token) {
            (Some(access), Some(refresh)) if !access.is_empty() && !refresh.is_empty() => {
                Ok(TokenPair::new(access, refresh))
            }
            (access, _) => Err(FeedFilterError::OAuthError(format!(
                "Token response is missing {}",
                if access.map_or(true, |a| a.is_empty()) {
                    "access_token"
                } else {
                    "refresh_token"
                }
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant<'a> {
    AuthorizationCode(&'a str),
    RefreshToken(&'a str),
}

impl Grant<'_> {
    fn grant_type(&self) -> &'static str {
        match self {
            Grant::AuthorizationCode(_) => "authorization_code",
            Grant::RefreshToken(_) => "refresh_token",
        }
    }

    fn form<'a>(&'a self, creds: &'a Credentials) -> [(&'static str, &'a str); 5] {
        let (field, value) = match self {
            Grant::AuthorizationCode(code) => ("code", *code),
            Grant::RefreshToken(token) => ("refresh_token", *token),
        };
        [
            ("client_id", creds.client_id.as_str()),
            ("client_secret", creds.client_secret.as_str()),
            ("redirect_uri", creds.redirect_uri.as_str()),
            ("grant_type", self.grant_type()),
            (field, value),
        ]
    }
}

/// Make one token-endpoint call. Non-success is an `AuthError` with the
/// status and body; there is no retry.
pub async fn request_token(
    client: &reqwest::Client,
    token_endpoint: &str,
    creds: &Credentials,
    grant: Grant<'_>,
) -> Result<TokenPair, FeedFilterError> {
    tracing::debug!(grant_type = grant.grant_type(), endpoint = token_endpoint, "requesting token");
    let resp = client
        .post(token_endpoint)
        .form(&grant.form(creds))
        .send()
        .await?;

    if !resp.status().is_success() {
        let (status, body) = failure_parts(resp).await;
        tracing::warn!(status, grant_type = grant.grant_type(), "token endpoint rejected request");
        return Err(FeedFilterError::AuthError { status, body });
    }

    let token_resp: TokenResponse = resp.json().await.map_err(|e| {
        FeedFilterError::OAuthError(format!("Failed to parse token response: {e}"))
    })?;

    token_resp.into_token_pair()
}

pub async fn exchange_code(
    client: &reqwest::Client,
    token_endpoint: &str,
    creds: &Credentials,
    code: &str,
) -> Result<TokenPair, FeedFilterError> {
    request_token(client, token_endpoint, creds, Grant::AuthorizationCode(code)).await
}

pub async fn refresh_token(
    client: &reqwest::Client,
    token_endpoint: &str,
    creds: &Credentials,
    refresh_tok: &str,
) -> Result<TokenPair, FeedFilterError> {
    request_token(client, token_endpoint, creds, Grant::RefreshToken(refresh_tok)).await
}
