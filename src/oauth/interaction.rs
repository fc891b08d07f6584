use std::io::{self, BufRead, Write};

use async_trait::async_trait;

use crate::error::FeedFilterError;

impl std::fmt::Debug for dyn UserInteraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserInteraction").finish()
    }
}

/// The human step of the authorization flow: show the operator the
/// authorization URL and hand back the redirect URL they land on.
#[async_trait]
pub trait UserInteraction: Send + Sync {
    async fn obtain_redirect(&self, authorization_url: &str) -> Result<String, FeedFilterError>;
}

/// Opens the browser when possible and reads the pasted redirect from stdin.
#[derive(Debug, Default)]
pub struct ConsoleInteraction {
    pub open_browser: bool,
}

impl ConsoleInteraction {
    pub fn new() -> Self {
        Self { open_browser: true }
    }
}

#[async_trait]
impl UserInteraction for ConsoleInteraction {
    async fn obtain_redirect(&self, authorization_url: &str) -> Result<String, FeedFilterError> {
        if self.open_browser && webbrowser::open(authorization_url).is_err() {
            tracing::warn!("Could not open browser automatically");
        }
        println!("Authorize the application at:\n{authorization_url}\n");

        let stdin = io::stdin();
        let redirect = read_redirect(&mut stdin.lock())?;
        Ok(redirect)
    }
}

fn read_redirect(reader: &mut impl BufRead) -> Result<String, FeedFilterError> {
    print!("Paste the full redirect URL here: ");
    io::stdout().flush()?;
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
