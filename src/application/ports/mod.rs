//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod browser;
pub mod clipboard;
pub mod config;
pub mod notifier;
pub mod page_source;

// Re-export common types
pub use browser::{Browser, BrowserError};
pub use clipboard::{Clipboard, ClipboardError};
pub use config::ConfigStore;
pub use notifier::{Notice, NotificationError, NotificationIcon, Notifier};
pub use page_source::{PageSource, PageSourceError};
