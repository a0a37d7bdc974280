//! Browser port interface

use async_trait::async_trait;
use thiserror::Error;

/// Browser errors
#[derive(Debug, Clone, Error)]
pub enum BrowserError {
    #[error("{0} not found. Cannot open a browser on this system.")]
    OpenerNotFound(String),

    #[error("Failed to open URL: {0}")]
    OpenFailed(String),
}

/// Port for opening a URL in a new browsing context
#[async_trait]
pub trait Browser: Send + Sync {
    /// Open `url` in the user's browser.
    async fn open(&self, url: &str) -> Result<(), BrowserError>;
}

/// Blanket implementation for boxed browser types
#[async_trait]
impl Browser for Box<dyn Browser> {
    async fn open(&self, url: &str) -> Result<(), BrowserError> {
        self.as_ref().open(url).await
    }
}
