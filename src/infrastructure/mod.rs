//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the clipboard, the browser, page sources, etc.

pub mod browser;
pub mod clipboard;
pub mod config;
pub mod notification;
pub mod page;

// Re-export adapters
pub use browser::SystemBrowser;
pub use clipboard::{create_clipboard, ArboardClipboard, WaylandClipboard};
pub use config::XdgConfigStore;
pub use notification::{create_notifier, NotifyRustNotifier, NotifySendNotifier};
pub use page::{create_page_source, FilePageSource, HttpPageSource};
