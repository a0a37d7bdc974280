//! Main app runner for the harvest loop

use std::env;
use std::process::ExitCode;

use thiserror::Error;
use tokio::sync::mpsc;

use crate::application::ports::{ConfigStore, PageSource};
use crate::application::{
    ClipboardPoller, HarvestConfig, HarvestEvent, HarvestUpdate, HarvestUseCase, PageWatcher,
};
use crate::domain::config::AppConfig;
use crate::domain::error::{IntervalParseError, InvalidMatcherError};
use crate::domain::harvest::ALL_COMMANDS;
use crate::domain::schedule::Interval;
use crate::infrastructure::{
    create_clipboard, create_notifier, create_page_source, SystemBrowser, XdgConfigStore,
};

use super::args::HarvestOptions;
use super::commands::spawn_command_reader;
use super::presenter::Presenter;
use super::signals::spawn_shutdown_listener;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable that supplies the page source
pub const SOURCE_ENV_VAR: &str = "EMBED_HARVEST_SOURCE";

const EVENT_BUFFER: usize = 64;
const URL_DISPLAY_CHARS: usize = 72;

/// Errors turning merged configuration into harvest options
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("Missing page source. Pass --source <FILE|URL>, set EMBED_HARVEST_SOURCE, or run 'embed-harvest config set source <FILE|URL>'")]
    MissingSource,

    #[error("Invalid {key}: {source}")]
    InvalidInterval {
        key: &'static str,
        source: IntervalParseError,
    },

    #[error(transparent)]
    InvalidMatcher(#[from] InvalidMatcherError),
}

impl OptionsError {
    /// Exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingSource => EXIT_ERROR,
            Self::InvalidInterval { .. } | Self::InvalidMatcher(_) => EXIT_USAGE_ERROR,
        }
    }
}

/// Turn merged configuration into validated harvest options
pub fn harvest_options(config: &AppConfig) -> Result<HarvestOptions, OptionsError> {
    let source = config
        .source
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(OptionsError::MissingSource)?
        .to_string();

    Ok(HarvestOptions {
        source,
        poll_interval: parse_interval("poll-interval", config.poll_interval.as_deref())?
            .unwrap_or_else(Interval::default_poll),
        watch_interval: parse_interval("watch-interval", config.watch_interval.as_deref())?
            .unwrap_or_else(Interval::default_watch),
        embed: config.embed_matcher()?,
        media: config.media_matcher()?,
        notify: config.notify_or_default(),
        output: config.output_path(),
        refresh_label_on_discovery: config.refresh_label_on_discovery_or_default(),
        clipboard_backend: config.clipboard_backend_or_default().to_string(),
    })
}

fn parse_interval(key: &'static str, value: Option<&str>) -> Result<Option<Interval>, OptionsError> {
    value
        .map(|s| {
            s.parse::<Interval>()
                .map_err(|source| OptionsError::InvalidInterval { key, source })
        })
        .transpose()
}

/// Run the harvest loop until quit or a shutdown signal
pub async fn run_harvest(options: HarvestOptions) -> ExitCode {
    let presenter = Presenter::new();

    let page_source = match create_page_source(&options.source) {
        Ok(source) => source,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let described = page_source.describe();

    let config = HarvestConfig {
        embed: options.embed.clone(),
        media: options.media.clone(),
        enable_notify: options.notify,
        output: options.output.clone(),
        refresh_label_on_discovery: options.refresh_label_on_discovery,
    };

    let mut use_case = match HarvestUseCase::new(SystemBrowser::new(), create_notifier(), config)
    {
        Ok(use_case) => use_case,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let (tx, mut rx) = mpsc::channel(EVENT_BUFFER);

    if let Err(e) = spawn_shutdown_listener(tx.clone()) {
        presenter.error(&format!("Failed to setup signal handler: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }

    let watcher = PageWatcher::new(page_source, options.watch_interval);
    let poller = ClipboardPoller::new(
        create_clipboard(&options.clipboard_backend),
        options.poll_interval,
    );
    let watcher_task = tokio::spawn(watcher.run(tx.clone()));
    let poller_task = tokio::spawn(poller.run(tx.clone()));

    if let Err(e) = spawn_command_reader(tx.clone()) {
        presenter.warn(&format!("Operator input unavailable: {}", e));
    }
    drop(tx);

    tracing::info!(
        source = %described,
        poll_ms = options.poll_interval.as_millis(),
        watch_ms = options.watch_interval.as_millis(),
        "harvest started"
    );
    presenter.info(&format!("Watching {}", described));
    presenter.info("Type 'help' for commands");
    presenter.control(use_case.label());

    while let Some(event) = rx.recv().await {
        for update in use_case.handle(event).await {
            report(&presenter, &update);
        }
        if use_case.is_stopped() {
            break;
        }
    }

    watcher_task.abort();
    poller_task.abort();

    ExitCode::from(EXIT_SUCCESS)
}

/// Render one harvest update for the operator
pub fn report(presenter: &Presenter, update: &HarvestUpdate) {
    match update {
        HarvestUpdate::Collected { position, item } => {
            presenter.info(&collected_message(*position, &item.title));
        }
        HarvestUpdate::Opening { position, item } => {
            presenter.info(&format!("Opening [{}] {}", position, item.title));
        }
        HarvestUpdate::OpenFailed { item, reason } => {
            presenter.error(&format!("Could not open '{}': {}", item.title, reason));
        }
        HarvestUpdate::Exhausted => presenter.notice("No more items"),
        HarvestUpdate::Captured { position, item } => {
            presenter.success(&format!(
                "Captured [{}] {} -> {}",
                position,
                item.title,
                Presenter::shorten(&item.media_url, URL_DISPLAY_CHARS)
            ));
        }
        HarvestUpdate::Discarded { media_url } => {
            presenter.warn(&format!(
                "No item waiting for {}",
                Presenter::shorten(media_url, URL_DISPLAY_CHARS)
            ));
        }
        HarvestUpdate::LabelChanged(label) => presenter.control(label),
        HarvestUpdate::Exported {
            payload,
            count,
            path,
        } => {
            presenter.output(payload);
            presenter.notice(&export_notice(*count));
            if let Some(path) = path {
                presenter.info(&format!("Saved to {}", path.display()));
            }
        }
        HarvestUpdate::ExportFailed(message) => presenter.error(message),
        HarvestUpdate::Status(status) => {
            presenter.key_value("collected", &status.collected.to_string());
            presenter.key_value("captured", &status.captured.to_string());
            presenter.key_value("last_seen", status.last_seen.as_deref().unwrap_or("(none)"));
        }
        HarvestUpdate::Listing(entries) => {
            if entries.is_empty() {
                presenter.info("No items collected yet");
            }
            for entry in entries {
                presenter.list_entry(
                    entry.position,
                    &entry.item.title,
                    &entry.item.url,
                    entry.media_url.is_some(),
                );
            }
        }
        HarvestUpdate::Help => {
            for command in ALL_COMMANDS {
                presenter.key_value(command.as_str(), command.description());
            }
        }
        HarvestUpdate::Stopped { saved_to } => {
            if let Some(path) = saved_to {
                presenter.success(&format!("Saved captured list to {}", path.display()));
            }
            presenter.info("Stopped");
        }
    }
}

fn collected_message(position: usize, title: &str) -> String {
    format!("Collected [{}] {}", position, title)
}

fn export_notice(count: usize) -> String {
    format!("Export ready: copy the list above ({} item(s))", count)
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load_or_empty().await;

    let env_config = AppConfig {
        source: env::var(SOURCE_ENV_VAR).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_source() -> AppConfig {
        AppConfig {
            source: Some("page.html".to_string()),
            ..AppConfig::defaults()
        }
    }

    #[test]
    fn options_require_source() {
        let err = harvest_options(&AppConfig::defaults()).unwrap_err();
        assert!(matches!(err, OptionsError::MissingSource));
        assert_eq!(err.exit_code(), EXIT_ERROR);
        assert!(err.to_string().contains("source"));
    }

    #[test]
    fn options_treat_blank_source_as_missing() {
        let config = AppConfig {
            source: Some("  ".to_string()),
            ..AppConfig::defaults()
        };
        assert!(matches!(
            harvest_options(&config),
            Err(OptionsError::MissingSource)
        ));
    }

    #[test]
    fn options_use_defaults() {
        let options = harvest_options(&config_with_source()).unwrap();
        assert_eq!(options.source, "page.html");
        assert_eq!(options.poll_interval.as_millis(), 1000);
        assert_eq!(options.watch_interval.as_millis(), 1000);
        assert_eq!(options.media.provider(), "bluetiger");
        assert!(!options.notify);
        assert!(options.output.is_none());
        assert!(!options.refresh_label_on_discovery);
        assert_eq!(options.clipboard_backend, "arboard");
    }

    #[test]
    fn options_fall_back_when_intervals_unset() {
        let config = AppConfig {
            source: Some("page.html".to_string()),
            poll_interval: Some("250ms".to_string()),
            ..AppConfig::empty()
        };
        let options = harvest_options(&config).unwrap();
        assert_eq!(options.poll_interval.as_millis(), 250);
        assert_eq!(options.watch_interval, Interval::default_watch());
    }

    #[test]
    fn discovery_message_names_collected_item() {
        assert_eq!(collected_message(2, "Lecture 2"), "Collected [2] Lecture 2");
    }

    #[test]
    fn export_notice_asks_for_hand_off() {
        let notice = export_notice(3);
        assert!(notice.starts_with("Export ready"));
        assert!(notice.contains("copy the list above"));
        assert!(notice.contains("3 item(s)"));
    }

    #[test]
    fn options_reject_bad_interval_as_usage_error() {
        let config = AppConfig {
            poll_interval: Some("fast".to_string()),
            ..config_with_source()
        };
        let err = harvest_options(&config).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_USAGE_ERROR);
        assert!(err.to_string().contains("poll-interval"));
    }

    #[test]
    fn options_reject_empty_marker() {
        let config = AppConfig {
            media_marker: Some(String::new()),
            ..config_with_source()
        };
        let err = harvest_options(&config).unwrap_err();
        assert!(matches!(err, OptionsError::InvalidMatcher(_)));
        assert_eq!(err.exit_code(), EXIT_USAGE_ERROR);
    }

    #[test]
    fn cli_overrides_file_values() {
        let file = AppConfig {
            source: Some("from-file.html".to_string()),
            notify: Some(true),
            ..AppConfig::empty()
        };
        let cli = AppConfig {
            source: Some("from-cli.html".to_string()),
            ..AppConfig::empty()
        };
        let merged = AppConfig::defaults().merge(file).merge(cli);
        assert_eq!(merged.source, Some("from-cli.html".to_string()));
        assert_eq!(merged.notify, Some(true));
    }
}
