use crate::config::Config;
use crate::error::FeedFilterError;
use crate::oauth::interaction::UserInteraction;
use crate::oauth::state::{complete_authorization, AuthorizationCode, AuthorizationRequest, StateNonce};
use crate::oauth::store::TokenStore;
use crate::oauth::token::{exchange_code, refresh_token, TokenPair};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    NoToken,
    AwaitingUserRedirect,
    Exchanging,
    Authorized,
    Refreshing,
}

/// Three-legged authorization-code flow against the configured provider.
///
/// Every successful exchange or refresh is persisted to the token store
/// before it is returned. Any failure drops the flow back to `NoToken`; the
/// operator restarts from `begin_authorization`.
#[derive(Debug)]
pub struct AuthorizationFlow<'a> {
    config: &'a Config,
    client: reqwest::Client,
    store: TokenStore,
    state: FlowState,
    pending: Option<StateNonce>,
}

impl<'a> AuthorizationFlow<'a> {
    pub fn new(config: &'a Config, client: reqwest::Client) -> Self {
        Self {
            config,
            client,
            store: TokenStore::new(config.token_path.clone()),
            state: FlowState::NoToken,
            pending: None,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    /// Start a new attempt with a fresh nonce. Any previous pending nonce is
    /// discarded and can no longer complete.
    pub fn begin_authorization(&mut self) -> Result<AuthorizationRequest, FeedFilterError> {
        let request = AuthorizationRequest::new(
            &self.config.endpoints,
            &self.config.credentials,
            StateNonce::generate(),
        )?;
        self.pending = Some(request.state.clone());
        self.state = FlowState::AwaitingUserRedirect;
        tracing::info!("authorization started, awaiting redirect");
        Ok(request)
    }

    /// Check the pasted redirect against the pending nonce. The nonce is used
    /// up whatever the outcome.
    pub fn accept_redirect(&mut self, redirect_url: &str) -> Result<AuthorizationCode, FeedFilterError> {
        let Some(expected) = self.pending.take() else {
            self.state = FlowState::NoToken;
            return Err(FeedFilterError::StateMismatch);
        };

        match complete_authorization(redirect_url, expected.as_str()) {
            Ok(code) => {
                self.state = FlowState::Exchanging;
                Ok(code)
            }
            Err(e) => {
                self.state = FlowState::NoToken;
                Err(e)
            }
        }
    }

    pub async fn exchange_code_for_tokens(
        &mut self,
        code: &AuthorizationCode,
    ) -> Result<TokenPair, FeedFilterError> {
        self.state = FlowState::Exchanging;
        let result = exchange_code(
            &self.client,
            &self.config.endpoints.token_url,
            &self.config.credentials,
            code.as_str(),
        )
        .await;
        self.persist(result)
    }

    /// Trade a refresh token for a new pair. The returned refresh token is
    /// stored as is, whether or not the provider rotated it.
    pub async fn refresh_access_token(&mut self, refresh_tok: &str) -> Result<TokenPair, FeedFilterError> {
        self.state = FlowState::Refreshing;
        tracing::info!("refreshing access token");
        let result = refresh_token(
            &self.client,
            &self.config.endpoints.token_url,
            &self.config.credentials,
            refresh_tok,
        )
        .await;
        self.persist(result)
    }

    /// Run the whole interactive flow once.
    pub async fn authorize(&mut self, ui: &dyn UserInteraction) -> Result<TokenPair, FeedFilterError> {
        let request = self.begin_authorization()?;
        let redirect = match ui.obtain_redirect(&request.url).await {
            Ok(redirect) => redirect,
            Err(e) => {
                self.pending = None;
                self.state = FlowState::NoToken;
                return Err(e);
            }
        };
        let code = self.accept_redirect(&redirect)?;
        self.exchange_code_for_tokens(&code).await
    }

    /// Use the stored pair when there is one, otherwise authorize.
    pub async fn ensure_token(&mut self, ui: &dyn UserInteraction) -> Result<TokenPair, FeedFilterError> {
        if let Some(pair) = self.store.load() {
            tracing::debug!("using stored token pair");
            self.state = FlowState::Authorized;
            return Ok(pair);
        }
        self.authorize(ui).await
    }

    fn persist(
        &mut self,
        result: Result<TokenPair, FeedFilterError>,
    ) -> Result<TokenPair, FeedFilterError> {
        let pair = match result {
            Ok(pair) => pair,
            Err(e) => {
                self.state = FlowState::NoToken;
                return Err(e);
            }
        };
        if let Err(e) = self.store.save(&pair) {
            self.state = FlowState::NoToken;
            return Err(e);
        }
        self.state = FlowState::Authorized;
        Ok(pair)
    }
}
