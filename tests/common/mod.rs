pub mod http_mock;

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use feedfilter::{Config, Credentials, Endpoints, FeedFilterError, UserInteraction};
use reqwest::Url;

/// Config pointing every endpoint at the mock server and the token record
/// into `dir`.
#[allow(dead_code)]
pub fn mock_config(server_uri: &str, dir: &Path) -> Config {
    Config {
        credentials: Credentials {
            client_id: "test-client".into(),
            client_secret: "test-secret".into(),
            redirect_uri: "http://localhost/callback".into(),
        },
        endpoints: Endpoints {
            authorize_url: format!("{server_uri}/oauth2/auth"),
            token_url: format!("{server_uri}{}", http_mock::TOKEN_PATH),
            api_base: format!("{server_uri}/api"),
        },
        token_path: dir.join("tokens.json"),
        request_timeout: Duration::from_secs(5),
    }
}

/// Plays the operator: answers with the redirect the provider would send,
/// optionally tampered with.
#[allow(dead_code)]
pub enum Operator {
    Approves(&'static str),
    ForgedState(&'static str),
    Denies,
}

#[async_trait]
impl UserInteraction for Operator {
    async fn obtain_redirect(&self, authorization_url: &str) -> Result<String, FeedFilterError> {
        let url = Url::parse(authorization_url).expect("authorization url");
        let state = url
            .query_pairs()
            .find(|(k, _)| k == "state")
            .map(|(_, v)| v.into_owned())
            .expect("state param");
        Ok(match self {
            Operator::Approves(code) => {
                format!("http://localhost/callback?code={code}&state={state}")
            }
            Operator::ForgedState(code) => {
                format!("http://localhost/callback?code={code}&state=forged-{state}")
            }
            Operator::Denies => {
                format!("http://localhost/callback?error=access_denied&state={state}")
            }
        })
    }
}
