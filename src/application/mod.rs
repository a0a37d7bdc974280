//! Application layer - Use cases and port interfaces
//!
//! Contains the harvest loop, the page watcher, the clipboard poller
//! and the trait definitions for external system interactions.

pub mod harvest;
pub mod poller;
pub mod ports;
pub mod watcher;

// Re-export use cases
pub use harvest::{
    write_export, HarvestConfig, HarvestError, HarvestEvent, HarvestStatus, HarvestUpdate,
    HarvestUseCase, ListingEntry,
};
pub use poller::ClipboardPoller;
pub use watcher::{EmbedScanner, PageWatcher, ScannerError};
