//! Harvest use case
//!
//! The single owner of the harvest session. Watcher, poller, operator
//! commands and signals only produce [`HarvestEvent`]s; this loop applies
//! them one at a time and reports what happened as [`HarvestUpdate`]s.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::error::ExportError;
use crate::domain::harvest::{
    render_export, CollectedItem, EmbedMatcher, ExportedItem, HarvestSession, MediaMatcher,
    OperatorCommand, PollOutcome,
};

use super::ports::{Browser, Notice, NotificationIcon, Notifier};
use super::watcher::{EmbedScanner, ScannerError};

const APP_NAME: &str = "EmbedHarvest";

/// Errors from setting up the harvest use case
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Scanner setup failed: {0}")]
    Scanner(#[from] ScannerError),
}

/// Inputs to the harvest loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarvestEvent {
    /// The watched page changed; carries the new snapshot
    PageChanged(String),
    /// The clipboard held this text
    ClipboardSampled(String),
    /// The operator typed a command
    Command(OperatorCommand),
    /// SIGINT/SIGTERM
    Shutdown,
}

/// Configuration for the harvest loop
#[derive(Debug, Clone, Default)]
pub struct HarvestConfig {
    /// Locates embeds and titles in page snapshots
    pub embed: EmbedMatcher,
    /// Decides which clipboard values are media URLs
    pub media: MediaMatcher,
    /// Whether to show desktop notifications
    pub enable_notify: bool,
    /// Where to write exports, besides stdout
    pub output: Option<PathBuf>,
    /// Refresh the navigator label on discovery, not only on capture
    pub refresh_label_on_discovery: bool,
}

/// Counters for the status command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestStatus {
    pub collected: usize,
    pub captured: usize,
    pub last_seen: Option<String>,
}

/// One row of the list command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub position: usize,
    pub item: CollectedItem,
    pub media_url: Option<String>,
}

/// Observable results of handling one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarvestUpdate {
    /// A new embed was collected
    Collected {
        position: usize,
        item: CollectedItem,
    },
    /// The navigator opened an item
    Opening {
        position: usize,
        item: CollectedItem,
    },
    /// The browser could not be launched
    OpenFailed { item: CollectedItem, reason: String },
    /// The navigator has nothing left to open
    Exhausted,
    /// A media URL was paired with an item
    Captured {
        position: usize,
        item: ExportedItem,
    },
    /// A media URL arrived with no item waiting for it
    Discarded { media_url: String },
    /// The navigator label shown to the operator changed
    LabelChanged(String),
    /// The captured list is ready for hand-off
    Exported {
        payload: String,
        count: usize,
        path: Option<PathBuf>,
    },
    /// Writing the export file failed
    ExportFailed(String),
    Status(HarvestStatus),
    Listing(Vec<ListingEntry>),
    Help,
    /// The loop is done; `saved_to` is set if the list was written on exit
    Stopped { saved_to: Option<PathBuf> },
}

/// Harvest use case
pub struct HarvestUseCase<B, N>
where
    B: Browser,
    N: Notifier,
{
    browser: B,
    notifier: N,
    scanner: EmbedScanner,
    config: HarvestConfig,
    session: HarvestSession,
    label: String,
    stopped: bool,
}

impl<B, N> HarvestUseCase<B, N>
where
    B: Browser,
    N: Notifier,
{
    /// Create a new harvest use case with an empty session
    pub fn new(browser: B, notifier: N, config: HarvestConfig) -> Result<Self, HarvestError> {
        let scanner = EmbedScanner::new(&config.embed)?;
        let session = HarvestSession::new();
        let label = session.label();

        Ok(Self {
            browser,
            notifier,
            scanner,
            config,
            session,
            label,
            stopped: false,
        })
    }

    pub fn session(&self) -> &HarvestSession {
        &self.session
    }

    /// Label currently shown on the navigator control
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Apply one event to the session
    pub async fn handle(&mut self, event: HarvestEvent) -> Vec<HarvestUpdate> {
        if self.stopped {
            return Vec::new();
        }

        match event {
            HarvestEvent::PageChanged(snapshot) => self.on_page_changed(&snapshot),
            HarvestEvent::ClipboardSampled(text) => self.on_clipboard(&text).await,
            HarvestEvent::Command(command) => self.on_command(command).await,
            HarvestEvent::Shutdown => self.stop().await,
        }
    }

    fn on_page_changed(&mut self, snapshot: &str) -> Vec<HarvestUpdate> {
        let Some(discovery) = self.scanner.scan(snapshot) else {
            return Vec::new();
        };

        let Some((position, item)) = self.session.record_discovery(discovery) else {
            return Vec::new();
        };

        let mut updates = vec![HarvestUpdate::Collected {
            position,
            item: item.clone(),
        }];
        if self.config.refresh_label_on_discovery {
            updates.extend(self.refresh_label());
        }
        updates
    }

    async fn on_clipboard(&mut self, text: &str) -> Vec<HarvestUpdate> {
        match self.session.observe_clipboard(text, &self.config.media) {
            PollOutcome::Idle => Vec::new(),
            PollOutcome::Sampled => vec![HarvestUpdate::Discarded {
                media_url: text.to_string(),
            }],
            PollOutcome::Accepted { position, item } => {
                self.notify(
                    "Media URL captured",
                    &format!("[{}] {}", position, item.title),
                    NotificationIcon::Info,
                )
                .await;

                let mut updates = vec![HarvestUpdate::Captured { position, item }];
                updates.extend(self.refresh_label());
                updates
            }
        }
    }

    async fn on_command(&mut self, command: OperatorCommand) -> Vec<HarvestUpdate> {
        match command {
            OperatorCommand::OpenNext => self.open_next().await,
            OperatorCommand::Export => self.export().await,
            OperatorCommand::Status => vec![HarvestUpdate::Status(HarvestStatus {
                collected: self.session.collected().len(),
                captured: self.session.exported().len(),
                last_seen: self.session.last_seen().map(str::to_string),
            })],
            OperatorCommand::List => vec![HarvestUpdate::Listing(self.listing())],
            OperatorCommand::Help => vec![HarvestUpdate::Help],
            OperatorCommand::Quit => self.stop().await,
        }
    }

    /// Open the item under the cursor. The cursor itself does not move.
    async fn open_next(&mut self) -> Vec<HarvestUpdate> {
        let Some(item) = self.session.current().cloned() else {
            self.notify("Harvest", "No more items", NotificationIcon::Warning)
                .await;
            return vec![HarvestUpdate::Exhausted];
        };
        let position = self.session.cursor() + 1;

        match self.browser.open(&item.url).await {
            Ok(()) => vec![HarvestUpdate::Opening { position, item }],
            Err(e) => vec![HarvestUpdate::OpenFailed {
                item,
                reason: e.to_string(),
            }],
        }
    }

    async fn export(&mut self) -> Vec<HarvestUpdate> {
        let exported = self.session.exported();
        let count = exported.len();
        let payload = match render_export(exported) {
            Ok(payload) => payload,
            Err(e) => return vec![HarvestUpdate::ExportFailed(e.to_string())],
        };

        let mut updates = Vec::new();
        let path = match self.config.output.clone() {
            Some(path) => match write_export(&path, &payload).await {
                Ok(()) => Some(path),
                Err(e) => {
                    updates.push(HarvestUpdate::ExportFailed(e.to_string()));
                    None
                }
            },
            None => None,
        };

        self.notify(
            "Export ready",
            &format!("Copy the list above ({} item(s))", count),
            NotificationIcon::Success,
        )
        .await;

        updates.insert(
            0,
            HarvestUpdate::Exported {
                payload,
                count,
                path,
            },
        );
        updates
    }

    /// Stop the loop, saving the captured list if an output path is set.
    async fn stop(&mut self) -> Vec<HarvestUpdate> {
        self.stopped = true;

        let mut updates = Vec::new();
        let mut saved_to = None;

        if let Some(path) = self.config.output.clone() {
            if !self.session.exported().is_empty() {
                let written = match render_export(self.session.exported()) {
                    Ok(payload) => write_export(&path, &payload).await,
                    Err(e) => Err(e),
                };
                match written {
                    Ok(()) => saved_to = Some(path),
                    Err(e) => updates.push(HarvestUpdate::ExportFailed(e.to_string())),
                }
            }
        }

        updates.push(HarvestUpdate::Stopped { saved_to });
        updates
    }

    fn listing(&self) -> Vec<ListingEntry> {
        let exported = self.session.exported();
        self.session
            .collected()
            .iter()
            .enumerate()
            .map(|(i, item)| ListingEntry {
                position: i + 1,
                item: item.clone(),
                media_url: exported.get(i).map(|e| e.media_url.clone()),
            })
            .collect()
    }

    fn refresh_label(&mut self) -> Option<HarvestUpdate> {
        let label = self.session.label();
        if label == self.label {
            return None;
        }
        self.label = label.clone();
        Some(HarvestUpdate::LabelChanged(label))
    }

    async fn notify(&self, title: &str, message: &str, icon: NotificationIcon) {
        if !self.config.enable_notify {
            return;
        }
        let notice = Notice::new(format!("{}: {}", APP_NAME, title), message, icon);
        if let Err(e) = self.notifier.notify(&notice).await {
            tracing::debug!(error = %e, "notification failed");
        }
    }
}

/// Write an export payload, creating parent directories as needed
pub async fn write_export(path: &Path, payload: &str) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| ExportError::WriteError(e.to_string()))?;
    }

    tokio::fs::write(path, payload)
        .await
        .map_err(|e| ExportError::WriteError(e.to_string()))
}
