//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::harvest::{EmbedMatcher, MediaMatcher};
use crate::domain::schedule::Interval;

/// EmbedHarvest - pair embedded videos with their resolved media URLs
#[derive(Parser, Debug)]
#[command(name = "embed-harvest")]
#[command(version)]
#[command(about = "Watch a page for embedded videos and pair each with the media URL copied to the clipboard")]
#[command(long_about = None)]
pub struct Cli {
    /// Page to watch: a saved HTML file or an http(s) URL
    #[arg(short = 's', long, value_name = "FILE|URL")]
    pub source: Option<String>,

    /// Clipboard poll interval (e.g., 500ms, 1s)
    #[arg(short = 'p', long, value_name = "TIME")]
    pub poll_interval: Option<String>,

    /// Page re-read interval (e.g., 500ms, 1s)
    #[arg(short = 'w', long, value_name = "TIME")]
    pub watch_interval: Option<String>,

    /// Substring identifying embed source URLs
    #[arg(long, value_name = "TEXT")]
    pub embed_host: Option<String>,

    /// CSS selector of the element holding the video title
    #[arg(long, value_name = "SELECTOR")]
    pub title_selector: Option<String>,

    /// Substring a clipboard value must contain to count as a media URL
    #[arg(long, value_name = "TEXT")]
    pub media_marker: Option<String>,

    /// File extension a media URL must contain
    #[arg(long, value_name = "TEXT")]
    pub media_extension: Option<String>,

    /// Also write exports to this file
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<String>,

    /// Show desktop notifications
    #[arg(short = 'n', long)]
    pub notify: bool,

    /// Refresh the "Open next" label when new items are found
    #[arg(long)]
    pub refresh_label: bool,

    /// Clipboard backend
    #[arg(long, value_name = "BACKEND")]
    pub clipboard_backend: Option<ClipboardBackendArg>,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Clipboard backend argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ClipboardBackendArg {
    Arboard,
    Wayland,
}

impl ClipboardBackendArg {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Arboard => "arboard",
            Self::Wayland => "wayland",
        }
    }
}

/// Parsed harvest options
#[derive(Debug, Clone)]
pub struct HarvestOptions {
    pub source: String,
    pub poll_interval: Interval,
    pub watch_interval: Interval,
    pub embed: EmbedMatcher,
    pub media: MediaMatcher,
    pub notify: bool,
    pub output: Option<PathBuf>,
    pub refresh_label_on_discovery: bool,
    pub clipboard_backend: String,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "source",
    "poll_interval",
    "watch_interval",
    "embed_host",
    "title_selector",
    "media_marker",
    "media_extension",
    "notify",
    "output",
    "refresh_label_on_discovery",
    "clipboard_backend",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
