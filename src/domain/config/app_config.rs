//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidMatcherError;
use crate::domain::harvest::{
    EmbedMatcher, MediaMatcher, DEFAULT_EMBED_HOST, DEFAULT_MEDIA_EXTENSION,
    DEFAULT_MEDIA_MARKER, DEFAULT_TITLE_SELECTOR,
};

/// Default clipboard backend name
pub const DEFAULT_CLIPBOARD_BACKEND: &str = "arboard";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub source: Option<String>,
    pub poll_interval: Option<String>,
    pub watch_interval: Option<String>,
    pub embed_host: Option<String>,
    pub title_selector: Option<String>,
    pub media_marker: Option<String>,
    pub media_extension: Option<String>,
    pub notify: Option<bool>,
    pub output: Option<String>,
    pub refresh_label_on_discovery: Option<bool>,
    pub clipboard_backend: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            source: None,
            poll_interval: Some("1s".to_string()),
            watch_interval: Some("1s".to_string()),
            embed_host: Some(DEFAULT_EMBED_HOST.to_string()),
            title_selector: Some(DEFAULT_TITLE_SELECTOR.to_string()),
            media_marker: Some(DEFAULT_MEDIA_MARKER.to_string()),
            media_extension: Some(DEFAULT_MEDIA_EXTENSION.to_string()),
            notify: Some(false),
            output: None,
            refresh_label_on_discovery: Some(false),
            clipboard_backend: Some(DEFAULT_CLIPBOARD_BACKEND.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            source: other.source.or(self.source),
            poll_interval: other.poll_interval.or(self.poll_interval),
            watch_interval: other.watch_interval.or(self.watch_interval),
            embed_host: other.embed_host.or(self.embed_host),
            title_selector: other.title_selector.or(self.title_selector),
            media_marker: other.media_marker.or(self.media_marker),
            media_extension: other.media_extension.or(self.media_extension),
            notify: other.notify.or(self.notify),
            output: other.output.or(self.output),
            refresh_label_on_discovery: other
                .refresh_label_on_discovery
                .or(self.refresh_label_on_discovery),
            clipboard_backend: other.clipboard_backend.or(self.clipboard_backend),
        }
    }

    /// Build the embed matcher from the configured host and selector
    pub fn embed_matcher(&self) -> Result<EmbedMatcher, InvalidMatcherError> {
        EmbedMatcher::new(
            self.embed_host.as_deref().unwrap_or(DEFAULT_EMBED_HOST),
            self.title_selector.as_deref().unwrap_or(DEFAULT_TITLE_SELECTOR),
        )
    }

    /// Build the media matcher from the configured markers
    pub fn media_matcher(&self) -> Result<MediaMatcher, InvalidMatcherError> {
        MediaMatcher::new(
            self.media_marker.as_deref().unwrap_or(DEFAULT_MEDIA_MARKER),
            self.media_extension
                .as_deref()
                .unwrap_or(DEFAULT_MEDIA_EXTENSION),
        )
    }

    /// Get notify setting, or false if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(false)
    }

    /// Get export output path, if configured
    pub fn output_path(&self) -> Option<PathBuf> {
        self.output
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }

    /// Get label refresh setting, or false if not set
    pub fn refresh_label_on_discovery_or_default(&self) -> bool {
        self.refresh_label_on_discovery.unwrap_or(false)
    }

    /// Get clipboard backend, or "arboard" if not set
    pub fn clipboard_backend_or_default(&self) -> &str {
        self.clipboard_backend
            .as_deref()
            .unwrap_or(DEFAULT_CLIPBOARD_BACKEND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert!(config.source.is_none());
        assert_eq!(config.poll_interval, Some("1s".to_string()));
        assert_eq!(config.watch_interval, Some("1s".to_string()));
        assert_eq!(config.embed_host, Some("kollus".to_string()));
        assert_eq!(config.title_selector, Some(".title".to_string()));
        assert_eq!(config.media_marker, Some("bluetiger".to_string()));
        assert_eq!(config.media_extension, Some(".mp4".to_string()));
        assert_eq!(config.notify, Some(false));
        assert!(config.output.is_none());
        assert_eq!(config.clipboard_backend_or_default(), "arboard");
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.source.is_none());
        assert!(config.poll_interval.is_none());
        assert!(config.embed_host.is_none());
        assert!(config.notify.is_none());
        assert!(config.clipboard_backend.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            source: Some("base.html".to_string()),
            poll_interval: Some("1s".to_string()),
            embed_host: Some("kollus".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            source: Some("other.html".to_string()),
            poll_interval: None, // Should not override
            embed_host: Some("vimeo".to_string()),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.source, Some("other.html".to_string()));
        assert_eq!(merged.poll_interval, Some("1s".to_string())); // Kept from base
        assert_eq!(merged.embed_host, Some("vimeo".to_string()));
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = AppConfig {
            output: Some("list.json".to_string()),
            notify: Some(true),
            ..Default::default()
        };

        let merged = base.merge(AppConfig::empty());

        assert_eq!(merged.output_path(), Some(PathBuf::from("list.json")));
        assert!(merged.notify_or_default());
    }

    #[test]
    fn matchers_use_configured_values() {
        let config = AppConfig {
            media_marker: Some("cdn.example".to_string()),
            ..Default::default()
        };
        let media = config.media_matcher().unwrap();
        assert!(media.qualifies("https://cdn.example/v.mp4"));
        assert!(!media.qualifies("https://bluetiger.cdn/v.mp4"));

        let embed = AppConfig::empty().embed_matcher().unwrap();
        assert_eq!(embed, EmbedMatcher::default());
    }

    #[test]
    fn empty_marker_is_invalid() {
        let config = AppConfig {
            media_extension: Some(String::new()),
            ..Default::default()
        };
        assert!(config.media_matcher().is_err());
    }

    #[test]
    fn empty_output_is_unset() {
        let config = AppConfig {
            output: Some(String::new()),
            ..Default::default()
        };
        assert!(config.output_path().is_none());
    }

    #[test]
    fn boolean_defaults() {
        let config = AppConfig::empty();
        assert!(!config.notify_or_default());
        assert!(!config.refresh_label_on_discovery_or_default());
    }
}
