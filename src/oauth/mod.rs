pub mod flow;
pub mod interaction;
pub mod state;
pub mod store;
pub mod token;

pub use flow::{AuthorizationFlow, FlowState};
pub use interaction::{ConsoleInteraction, UserInteraction};
pub use state::{complete_authorization, AuthorizationCode, AuthorizationRequest, StateNonce};
pub use store::TokenStore;
pub use token::{exchange_code, refresh_token, TokenPair};
