use crate::config::Config;
use crate::error::FeedFilterError;
use crate::oauth::{AuthorizationFlow, ConsoleInteraction};

/// Run the auth command: always start a fresh authorization, replacing any
/// stored token pair on success.
pub async fn run_auth(config: &Config) -> Result<(), FeedFilterError> {
    let mut flow = AuthorizationFlow::new(config, config.http_client()?);
    flow.authorize(&ConsoleInteraction::new()).await?;
    println!(
        "Authorization successful. Tokens stored in {}",
        flow.store().path().display()
    );
    Ok(())
}
