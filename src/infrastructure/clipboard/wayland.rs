//! Wayland clipboard adapter using wl-paste

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{Clipboard, ClipboardError};

/// Wayland clipboard adapter using wl-paste
pub struct WaylandClipboard;

impl WaylandClipboard {
    /// Create a new Wayland clipboard adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for WaylandClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clipboard for WaylandClipboard {
    async fn read_text(&self) -> Result<String, ClipboardError> {
        let output = Command::new("wl-paste")
            .args(["--no-newline", "--type", "text"])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ClipboardError::WlPasteNotFound
                } else {
                    ClipboardError::ReadFailed(e.to_string())
                }
            })?;

        // wl-paste exits non-zero when the clipboard holds no text
        if !output.status.success() {
            return Err(ClipboardError::Empty);
        }

        let text = String::from_utf8(output.stdout)
            .map_err(|e| ClipboardError::ReadFailed(e.to_string()))?;
        if text.is_empty() {
            return Err(ClipboardError::Empty);
        }

        Ok(text)
    }
}
