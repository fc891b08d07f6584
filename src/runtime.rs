use crate::config::Config;
use crate::error::FeedFilterError;
use crate::feed::FeedClient;
use crate::oauth::{AuthorizationFlow, TokenPair, UserInteraction};
use crate::types::FeedItem;

/// Ties the authorization flow to the feed client: holds the current access
/// token and refreshes it once when the API answers 401.
#[derive(Debug)]
pub struct Runtime<'a> {
    flow: AuthorizationFlow<'a>,
    feed: FeedClient,
    access_token: Option<String>,
}

impl<'a> Runtime<'a> {
    pub fn new(config: &'a Config) -> Result<Self, FeedFilterError> {
        let client = config.http_client()?;
        let feed = FeedClient::new(&config.endpoints.api_base, client.clone())?;
        Ok(Self {
            flow: AuthorizationFlow::new(config, client),
            feed,
            access_token: None,
        })
    }

    pub fn flow(&self) -> &AuthorizationFlow<'a> {
        &self.flow
    }

    pub fn flow_mut(&mut self) -> &mut AuthorizationFlow<'a> {
        &mut self.flow
    }

    /// Load the stored token or run the interactive flow, and remember the
    /// resulting access token.
    pub async fn sign_in(&mut self, ui: &dyn UserInteraction) -> Result<TokenPair, FeedFilterError> {
        let pair = self.flow.ensure_token(ui).await?;
        self.access_token = Some(pair.access_token.clone());
        Ok(pair)
    }

    /// Fetch items with the current access token.
    pub async fn fetch(&mut self, stream_id: &str, count: usize) -> Result<Vec<FeedItem>, FeedFilterError> {
        let token = self.access_token.clone().ok_or(FeedFilterError::AuthRequired)?;
        self.fetch_items(&token, stream_id, count).await
    }

    /// Fetch items; on 401 refresh from the stored refresh token and retry
    /// exactly once. A second failure is returned as is.
    pub async fn fetch_items(
        &mut self,
        access_token: &str,
        stream_id: &str,
        count: usize,
    ) -> Result<Vec<FeedItem>, FeedFilterError> {
        match self.feed.fetch_items(access_token, stream_id, count).await {
            Err(e) if e.is_unauthorized() => {
                tracing::info!(stream_id, "access token rejected, refreshing");
            }
            other => {
                if other.is_ok() {
                    self.access_token = Some(access_token.to_string());
                }
                return other;
            }
        }

        let stored = self.flow.store().load().ok_or(FeedFilterError::AuthRequired)?;
        let pair = self.flow.refresh_access_token(&stored.refresh_token).await?;
        self.access_token = Some(pair.access_token.clone());

        self.feed.fetch_items(&pair.access_token, stream_id, count).await
    }
}
