//! Page source port interface

use async_trait::async_trait;
use thiserror::Error;

/// Page source errors
#[derive(Debug, Clone, Error)]
pub enum PageSourceError {
    #[error("Page source not found: {0}")]
    NotFound(String),

    #[error("Failed to read page snapshot: {0}")]
    ReadFailed(String),

    #[error("Page request failed with status {status}: {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Page request failed: {0}")]
    RequestFailed(String),
}

/// Port for reading the current state of the watched page
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Read one full HTML snapshot of the page.
    async fn snapshot(&self) -> Result<String, PageSourceError>;

    /// Human-readable location of the page (path or URL)
    fn describe(&self) -> String;
}

/// Blanket implementation for boxed page sources
#[async_trait]
impl PageSource for Box<dyn PageSource> {
    async fn snapshot(&self) -> Result<String, PageSourceError> {
        self.as_ref().snapshot().await
    }

    fn describe(&self) -> String {
        self.as_ref().describe()
    }
}
