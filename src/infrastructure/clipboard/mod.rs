//! Clipboard infrastructure module
//!
//! Provides cross-platform clipboard reads using arboard (primary)
//! or wl-paste on Wayland.

mod arboard;
mod wayland;

pub use arboard::ArboardClipboard;
pub use wayland::WaylandClipboard;

use crate::application::ports::Clipboard;

/// Valid clipboard backend names
pub const VALID_CLIPBOARD_BACKENDS: &[&str] = &["arboard", "wayland"];

/// Create the clipboard adapter for a backend name.
///
/// Unknown names fall back to arboard.
pub fn create_clipboard(backend: &str) -> Box<dyn Clipboard> {
    match backend.trim().to_lowercase().as_str() {
        "wayland" => Box::new(WaylandClipboard::new()),
        _ => Box::new(ArboardClipboard::new()),
    }
}
