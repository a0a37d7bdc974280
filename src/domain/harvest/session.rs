//! Harvest session state

use std::fmt;

use super::item::{placeholder_title, CollectedItem, Discovery, ExportedItem};
use super::matcher::MediaMatcher;

/// Poller states for one clipboard sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PollState {
    #[default]
    Idle,
    Sampled,
    Accepted,
}

impl PollState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Sampled => "sampled",
            Self::Accepted => "accepted",
        }
    }
}

impl fmt::Display for PollState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of feeding one clipboard sample to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Same as the last sample, or not a media URL
    Idle,
    /// New media URL, but every collected item is already paired
    Sampled,
    /// New media URL paired with the item at `position` (1-based)
    Accepted { position: usize, item: ExportedItem },
}

impl PollOutcome {
    pub const fn state(&self) -> PollState {
        match self {
            Self::Idle => PollState::Idle,
            Self::Sampled => PollState::Sampled,
            Self::Accepted { .. } => PollState::Accepted,
        }
    }
}

/// Harvest session entity.
///
/// Owns the collected list, the export list, the cursor and the last
/// clipboard value seen. Invariants:
///   exported.len() == cursor <= collected.len()
///   no two collected items share a url
#[derive(Debug, Default)]
pub struct HarvestSession {
    collected: Vec<CollectedItem>,
    exported: Vec<ExportedItem>,
    cursor: usize,
    last_seen: Option<String>,
}

impl HarvestSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collected(&self) -> &[CollectedItem] {
        &self.collected
    }

    pub fn exported(&self) -> &[ExportedItem] {
        &self.exported
    }

    /// Index of the next item awaiting a media URL
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn last_seen(&self) -> Option<&str> {
        self.last_seen.as_deref()
    }

    /// Item the navigator should open next, if any
    pub fn current(&self) -> Option<&CollectedItem> {
        self.collected.get(self.cursor)
    }

    /// Check if every collected item has been paired
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.collected.len()
    }

    /// Navigator label, e.g. "Open next (2/5)"
    pub fn label(&self) -> String {
        format!("Open next ({}/{})", self.cursor, self.collected.len())
    }

    /// Append a discovery unless its url is empty or already collected.
    ///
    /// Returns the new item and its 1-based position.
    pub fn record_discovery(&mut self, discovery: Discovery) -> Option<(usize, &CollectedItem)> {
        if discovery.url.is_empty() || self.collected.iter().any(|c| c.url == discovery.url) {
            return None;
        }

        let position = self.collected.len() + 1;
        let title = discovery
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| placeholder_title(position));

        self.collected.push(CollectedItem::new(title, discovery.url));
        self.collected.last().map(|item| (position, item))
    }

    /// Feed one clipboard sample through Idle -> Sampled -> Accepted.
    pub fn observe_clipboard(&mut self, text: &str, media: &MediaMatcher) -> PollOutcome {
        if self.last_seen.as_deref() == Some(text) || !media.qualifies(text) {
            return PollOutcome::Idle;
        }

        // One shot per distinct value, even when nothing can be paired.
        self.last_seen = Some(text.to_string());

        let Some(current) = self.collected.get(self.cursor) else {
            return PollOutcome::Sampled;
        };

        let item = ExportedItem::new(current.title.clone(), text);
        self.exported.push(item.clone());
        self.cursor += 1;

        PollOutcome::Accepted {
            position: self.cursor,
            item,
        }
    }
}
