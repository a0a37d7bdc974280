//! Page change watcher
//!
//! Re-reads the page source on a fixed interval and forwards every snapshot
//! that differs from the previous one. Scanning a snapshot for an embed is
//! synchronous and happens on the harvest loop.

use scraper::{Html, Selector};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::domain::harvest::{Discovery, EmbedMatcher, SubstringMatcher};
use crate::domain::schedule::Interval;

use super::harvest::HarvestEvent;
use super::ports::PageSource;

/// Errors building a scanner
#[derive(Debug, Clone, Error)]
pub enum ScannerError {
    #[error("Invalid title selector \"{selector}\": {message}")]
    InvalidSelector { selector: String, message: String },
}

/// Finds the embed and its title in one page snapshot
#[derive(Debug)]
pub struct EmbedScanner {
    host: SubstringMatcher,
    source_selector: Selector,
    title_selector: Selector,
}

impl EmbedScanner {
    /// Compile the matcher's selectors
    pub fn new(matcher: &EmbedMatcher) -> Result<Self, ScannerError> {
        let title_selector =
            Selector::parse(&matcher.title_selector).map_err(|e| ScannerError::InvalidSelector {
                selector: matcher.title_selector.clone(),
                message: e.to_string(),
            })?;
        let source_selector =
            Selector::parse("[src]").map_err(|e| ScannerError::InvalidSelector {
                selector: "[src]".to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            host: matcher.host.clone(),
            source_selector,
            title_selector,
        })
    }

    /// Scan a snapshot for the first embed whose source matches the host.
    ///
    /// Returns `None` when the page holds no such embed.
    pub fn scan(&self, html: &str) -> Option<Discovery> {
        let document = Html::parse_document(html);

        let url = document
            .select(&self.source_selector)
            .filter_map(|el| el.value().attr("src"))
            .map(str::trim)
            .find(|src| !src.is_empty() && self.host.matches(src))?
            .to_string();

        let title = document
            .select(&self.title_selector)
            .next()
            .map(|el| el.text().collect::<Vec<_>>().join(" "))
            .map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|text| !text.is_empty());

        Some(Discovery { url, title })
    }
}

/// Polls a page source and emits changed snapshots
pub struct PageWatcher<S: PageSource> {
    source: S,
    interval: Interval,
    previous: Option<String>,
}

impl<S: PageSource> PageWatcher<S> {
    pub fn new(source: S, interval: Interval) -> Self {
        Self {
            source,
            interval,
            previous: None,
        }
    }

    /// Read one snapshot. Returns it only if it differs from the last one.
    ///
    /// Read failures are transient and yield `None`.
    pub async fn next_batch(&mut self) -> Option<String> {
        let snapshot = match self.source.snapshot().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::debug!(source = %self.source.describe(), error = %e, "page snapshot unavailable");
                return None;
            }
        };

        if self.previous.as_deref() == Some(snapshot.as_str()) {
            return None;
        }
        self.previous = Some(snapshot.clone());
        Some(snapshot)
    }

    /// Watch until the harvest loop goes away.
    pub async fn run(mut self, events: mpsc::Sender<HarvestEvent>) {
        loop {
            if let Some(snapshot) = self.next_batch().await {
                if events.send(HarvestEvent::PageChanged(snapshot)).await.is_err() {
                    return;
                }
            }
            tokio::time::sleep(self.interval.as_std()).await;
        }
    }
}
