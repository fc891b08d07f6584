pub mod env;
pub mod types;

pub use env::{load_config, request_timeout};
pub use types::{Config, Credentials, Endpoints};
