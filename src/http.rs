use std::time::Duration;

use crate::error::FeedFilterError;

const USER_AGENT: &str = concat!("feedfilter/", env!("CARGO_PKG_VERSION"));

/// Build a client with a fixed per-request timeout. A request that runs past
/// it fails with a transport error instead of hanging.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, FeedFilterError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Turn a non-success response into `(status, body)` for diagnostics.
pub(crate) async fn failure_parts(resp: reqwest::Response) -> (u16, String) {
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    (status, body)
}
