//! Clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("wl-paste not found. Please install wl-clipboard.")]
    WlPasteNotFound,

    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Clipboard is empty or does not hold text")]
    Empty,

    #[error("Failed to read clipboard: {0}")]
    ReadFailed(String),
}

/// Port for reading the system clipboard
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Read the current clipboard content as text.
    ///
    /// # Returns
    /// The clipboard text, or an error if it is unavailable or not text
    async fn read_text(&self) -> Result<String, ClipboardError>;
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl Clipboard for Box<dyn Clipboard> {
    async fn read_text(&self) -> Result<String, ClipboardError> {
        self.as_ref().read_text().await
    }
}
