//! Collected and exported item entities

use serde::{Deserialize, Serialize};

/// An embed discovered on the watched page.
/// Immutable once collected; unique by `url` within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectedItem {
    pub title: String,
    pub url: String,
}

impl CollectedItem {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// A collected item paired with the media URL captured from the clipboard.
///
/// Serialized as `{"title": ..., "mp4": ...}`, the shape the downloader reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedItem {
    pub title: String,
    #[serde(rename = "mp4")]
    pub media_url: String,
}

impl ExportedItem {
    pub fn new(title: impl Into<String>, media_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            media_url: media_url.into(),
        }
    }
}

/// Raw result of scanning one page snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    /// Embed source URL
    pub url: String,
    /// Descriptive text next to the embed, if the page has one
    pub title: Option<String>,
}

/// Placeholder title for an item without descriptive text.
/// `position` is the 1-based position the item occupies.
pub fn placeholder_title(position: usize) -> String {
    format!("video_{}", position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exported_item_uses_mp4_key() {
        let item = ExportedItem::new("A", "https://bluetiger.cdn/x.mp4");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"title":"A","mp4":"https://bluetiger.cdn/x.mp4"}"#);
    }

    #[test]
    fn placeholder_is_one_based() {
        assert_eq!(placeholder_title(1), "video_1");
        assert_eq!(placeholder_title(12), "video_12");
    }
}
