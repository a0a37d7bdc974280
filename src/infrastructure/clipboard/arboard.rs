//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::ports::{Clipboard, ClipboardError};

/// Cross-platform clipboard adapter using arboard
///
/// One platform handle is opened on first read and reused for every later
/// poll. It is dropped after a failed open so the next poll retries.
#[derive(Default)]
pub struct ArboardClipboard {
    handle: Arc<Mutex<Option<arboard::Clipboard>>>,
}

impl ArboardClipboard {
    /// Create a new arboard clipboard adapter
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn is_open(&self) -> bool {
        self.handle.lock().map(|h| h.is_some()).unwrap_or(false)
    }
}

fn read_with(slot: &mut Option<arboard::Clipboard>) -> Result<String, ClipboardError> {
    let clipboard = match slot {
        Some(clipboard) => clipboard,
        None => slot.insert(
            arboard::Clipboard::new()
                .map_err(|e| ClipboardError::ClipboardUnavailable(e.to_string()))?,
        ),
    };

    match clipboard.get_text() {
        Ok(text) if text.is_empty() => Err(ClipboardError::Empty),
        Ok(text) => Ok(text),
        Err(arboard::Error::ContentNotAvailable) => Err(ClipboardError::Empty),
        Err(arboard::Error::ClipboardNotSupported) => {
            *slot = None;
            Err(ClipboardError::ClipboardUnavailable(
                "clipboard not supported".to_string(),
            ))
        }
        Err(e) => Err(ClipboardError::ReadFailed(e.to_string())),
    }
}

#[async_trait]
impl Clipboard for ArboardClipboard {
    async fn read_text(&self) -> Result<String, ClipboardError> {
        let handle = Arc::clone(&self.handle);

        // arboard operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            let mut slot = handle
                .lock()
                .map_err(|_| ClipboardError::ReadFailed("clipboard handle poisoned".to_string()))?;
            read_with(&mut slot)
        })
        .await
        .map_err(|e| ClipboardError::ReadFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_is_opened_lazily() {
        let clipboard = ArboardClipboard::new();
        assert!(!clipboard.is_open());
    }

    #[tokio::test]
    async fn handle_is_kept_across_reads() {
        let clipboard = ArboardClipboard::new();
        let first = clipboard.read_text().await;
        if matches!(first, Err(ClipboardError::ClipboardUnavailable(_))) {
            // headless runner without a display
            assert!(!clipboard.is_open());
            return;
        }
        assert!(clipboard.is_open());
        let _ = clipboard.read_text().await;
        assert!(clipboard.is_open());
    }
}
