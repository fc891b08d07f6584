use reqwest::Url;

use crate::error::FeedFilterError;
use crate::http::failure_parts;
use crate::types::{FeedItem, StreamContents};

/// Reader API client. Holds no token; every call takes the access token to
/// use, so the caller decides when to refresh.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: reqwest::Client,
    api_base: Url,
}

impl FeedClient {
    pub fn new(api_base: &str, client: reqwest::Client) -> Result<Self, FeedFilterError> {
        let api_base = Url::parse(api_base).map_err(|e| {
            FeedFilterError::ConfigError(format!("Invalid API base URL '{api_base}': {e}"))
        })?;
        if api_base.cannot_be_a_base() {
            return Err(FeedFilterError::ConfigError(format!(
                "API base URL '{api_base}' cannot have a path"
            )));
        }
        Ok(Self { client, api_base })
    }

    /// `{api_base}/stream/contents/{stream_id}?n={count}` with the stream id
    /// as one percent-encoded segment.
    pub fn stream_url(&self, stream_id: &str, count: usize) -> Url {
        let mut url = self.api_base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["stream", "contents"])
                .push(stream_id);
        }
        url.query_pairs_mut().append_pair("n", &count.to_string());
        url
    }

    pub async fn fetch_items(
        &self,
        access_token: &str,
        stream_id: &str,
        count: usize,
    ) -> Result<Vec<FeedItem>, FeedFilterError> {
        let url = self.stream_url(stream_id, count);
        tracing::debug!(stream_id, count, "fetching stream contents");

        let resp = self
            .client
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !resp.status().is_success() {
            let (status, body) = failure_parts(resp).await;
            tracing::debug!(status, stream_id, "stream request failed");
            return Err(FeedFilterError::HttpError { status, body });
        }

        let contents: StreamContents = resp.json().await.map_err(|e| {
            FeedFilterError::ParseError(format!("Failed to parse stream contents: {e}"))
        })?;
        tracing::debug!(items = contents.items.len(), "stream contents received");
        Ok(contents.items)
    }
}
