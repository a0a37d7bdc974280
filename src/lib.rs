//! EmbedHarvest - collect embedded videos and pair them with media URLs
//!
//! This crate watches a page for embedded video frames, opens each one in
//! the browser on request, and pairs it with the media URL the operator
//! copies to the clipboard. The captured list is exported as JSON.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Harvest session state, matchers, intervals, config and errors
//! - **Application**: The harvest loop, page watcher, clipboard poller and port traits
//! - **Infrastructure**: Adapter implementations (clipboard, browser, page sources, etc.)
//! - **CLI**: Command-line interface, operator input, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
