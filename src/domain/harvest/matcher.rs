//! Configurable text matchers
//!
//! The page layout and the media host change more often than the harvesting
//! logic, so every substring the harvester keys on comes from configuration.

use crate::domain::error::InvalidMatcherError;

/// Default substring identifying an embed source URL
pub const DEFAULT_EMBED_HOST: &str = "kollus";

/// Default CSS selector of the element holding the video title
pub const DEFAULT_TITLE_SELECTOR: &str = ".title";

/// Default substring identifying a resolved media URL
pub const DEFAULT_MEDIA_MARKER: &str = "bluetiger";

/// Default media file extension marker
pub const DEFAULT_MEDIA_EXTENSION: &str = ".mp4";

/// Case-sensitive, non-empty substring predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstringMatcher {
    needle: String,
}

impl SubstringMatcher {
    /// Create a matcher. `name` identifies the setting in errors.
    pub fn new(name: &str, needle: impl Into<String>) -> Result<Self, InvalidMatcherError> {
        let needle = needle.into();
        if needle.is_empty() {
            return Err(InvalidMatcherError {
                name: name.to_string(),
            });
        }
        Ok(Self { needle })
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn matches(&self, haystack: &str) -> bool {
        haystack.contains(&self.needle)
    }
}

/// Locates embeds and their titles in a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedMatcher {
    pub host: SubstringMatcher,
    pub title_selector: String,
}

impl EmbedMatcher {
    pub fn new(host: &str, title_selector: &str) -> Result<Self, InvalidMatcherError> {
        let title_selector = title_selector.trim();
        if title_selector.is_empty() {
            return Err(InvalidMatcherError {
                name: "title_selector".to_string(),
            });
        }
        Ok(Self {
            host: SubstringMatcher::new("embed_host", host)?,
            title_selector: title_selector.to_string(),
        })
    }
}

impl Default for EmbedMatcher {
    fn default() -> Self {
        Self {
            host: SubstringMatcher {
                needle: DEFAULT_EMBED_HOST.to_string(),
            },
            title_selector: DEFAULT_TITLE_SELECTOR.to_string(),
        }
    }
}

/// Decides whether clipboard text is a resolved media URL.
/// Both the provider marker and the extension marker must be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaMatcher {
    provider: SubstringMatcher,
    extension: SubstringMatcher,
}

impl MediaMatcher {
    pub fn new(provider: &str, extension: &str) -> Result<Self, InvalidMatcherError> {
        Ok(Self {
            provider: SubstringMatcher::new("media_marker", provider)?,
            extension: SubstringMatcher::new("media_extension", extension)?,
        })
    }

    pub fn provider(&self) -> &str {
        self.provider.needle()
    }

    pub fn extension(&self) -> &str {
        self.extension.needle()
    }

    pub fn qualifies(&self, text: &str) -> bool {
        self.provider.matches(text) && self.extension.matches(text)
    }
}

impl Default for MediaMatcher {
    fn default() -> Self {
        Self {
            provider: SubstringMatcher {
                needle: DEFAULT_MEDIA_MARKER.to_string(),
            },
            extension: SubstringMatcher {
                needle: DEFAULT_MEDIA_EXTENSION.to_string(),
            },
        }
    }
}
