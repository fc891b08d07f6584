use std::path::PathBuf;
use std::time::Duration;

use crate::error::FeedFilterError;

use super::types::{Config, Credentials, Endpoints, DEFAULT_TIMEOUT};

pub const CLIENT_ID_VAR: &str = "INOREADER_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "INOREADER_CLIENT_SECRET";
pub const REDIRECT_URI_VAR: &str = "INOREADER_REDIRECT_URI";
pub const TOKEN_FILE_VAR: &str = "FEEDFILTER_TOKEN_FILE";
pub const TIMEOUT_VAR: &str = "FEEDFILTER_TIMEOUT_SECS";
pub const AUTH_URL_VAR: &str = "FEEDFILTER_AUTH_URL";
pub const TOKEN_URL_VAR: &str = "FEEDFILTER_TOKEN_URL";
pub const API_BASE_VAR: &str = "FEEDFILTER_API_BASE";

/// Resolve the full configuration from the process environment.
pub fn load_config() -> Result<Config, FeedFilterError> {
    config_from_lookup(|name| std::env::var(name).ok())
}

/// Resolve the configuration through an arbitrary variable lookup.
///
/// Every missing credential is reported in a single error so the operator
/// can fix them all at once. Empty values count as missing.
pub fn config_from_lookup<F>(lookup: F) -> Result<Config, FeedFilterError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    let client_id = get(CLIENT_ID_VAR);
    let client_secret = get(CLIENT_SECRET_VAR);
    let redirect_uri = get(REDIRECT_URI_VAR);

    let credentials = match (client_id, client_secret, redirect_uri) {
        (Some(client_id), Some(client_secret), Some(redirect_uri)) => Credentials {
            client_id,
            client_secret,
            redirect_uri,
        },
        (id, secret, redirect) => {
            let missing: Vec<&str> = [
                (CLIENT_ID_VAR, id.is_none()),
                (CLIENT_SECRET_VAR, secret.is_none()),
                (REDIRECT_URI_VAR, redirect.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, absent)| absent.then_some(name))
            .collect();
            return Err(FeedFilterError::ConfigError(format!(
                "Missing required environment variables: {}",
                missing.join(", ")
            )));
        }
    };

    let defaults = Endpoints::default();
    let endpoints = Endpoints {
        authorize_url: get(AUTH_URL_VAR).unwrap_or(defaults.authorize_url),
        token_url: get(TOKEN_URL_VAR).unwrap_or(defaults.token_url),
        api_base: get(API_BASE_VAR).unwrap_or(defaults.api_base),
    };

    let token_path = get(TOKEN_FILE_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(default_token_path);

    Ok(Config {
        credentials,
        endpoints,
        token_path,
        request_timeout: request_timeout(&lookup)?,
    })
}

/// Request timeout from `FEEDFILTER_TIMEOUT_SECS`, falling back to the default.
pub fn request_timeout<F>(lookup: F) -> Result<Duration, FeedFilterError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(TIMEOUT_VAR).filter(|v| !v.trim().is_empty()) {
        None => Ok(DEFAULT_TIMEOUT),
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
            _ => Err(FeedFilterError::ConfigError(format!(
                "{TIMEOUT_VAR} must be a positive number of seconds, got '{raw}'"
            ))),
        },
    }
}

pub fn default_token_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".feedfilter")
        .join("tokens.json")
}
