//! Config command handler

use crate::application::ports::ConfigStore;
use crate::application::EmbedScanner;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::harvest::{EmbedMatcher, SubstringMatcher, DEFAULT_EMBED_HOST};
use crate::domain::schedule::Interval;
use crate::infrastructure::clipboard::VALID_CLIPBOARD_BACKENDS;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;
    validate_config_value(key, value)?;

    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    let config = store.load().await?;
    match read_value(&config, key) {
        Some(v) => presenter.output(&v),
        None => presenter.output(NOT_SET),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        presenter.key_value(
            key,
            read_value(&config, key).as_deref().unwrap_or(NOT_SET),
        );
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn ensure_known_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Store an already validated value on the config
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "source" => config.source = Some(value.to_string()),
        "poll_interval" => config.poll_interval = Some(value.to_string()),
        "watch_interval" => config.watch_interval = Some(value.to_string()),
        "embed_host" => config.embed_host = Some(value.to_string()),
        "title_selector" => config.title_selector = Some(value.to_string()),
        "media_marker" => config.media_marker = Some(value.to_string()),
        "media_extension" => config.media_extension = Some(value.to_string()),
        "notify" => config.notify = Some(parse_bool_for(key, value)?),
        "output" => config.output = Some(value.to_string()),
        "refresh_label_on_discovery" => {
            config.refresh_label_on_discovery = Some(parse_bool_for(key, value)?)
        }
        "clipboard_backend" => config.clipboard_backend = Some(value.to_lowercase()),
        _ => unreachable!(), // Already validated
    }
    Ok(())
}

fn read_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "source" => config.source.clone(),
        "poll_interval" => config.poll_interval.clone(),
        "watch_interval" => config.watch_interval.clone(),
        "embed_host" => config.embed_host.clone(),
        "title_selector" => config.title_selector.clone(),
        "media_marker" => config.media_marker.clone(),
        "media_extension" => config.media_extension.clone(),
        "notify" => config.notify.map(|b| b.to_string()),
        "output" => config.output.clone(),
        "refresh_label_on_discovery" => config.refresh_label_on_discovery.map(|b| b.to_string()),
        "clipboard_backend" => config.clipboard_backend.clone(),
        _ => None,
    }
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "poll_interval" | "watch_interval" => {
            value
                .parse::<Interval>()
                .map_err(|e| invalid(e.to_string()))?;
        }
        "embed_host" | "media_marker" | "media_extension" => {
            SubstringMatcher::new(key, value).map_err(|e| invalid(e.to_string()))?;
        }
        "title_selector" => {
            let matcher =
                EmbedMatcher::new(DEFAULT_EMBED_HOST, value).map_err(|e| invalid(e.to_string()))?;
            EmbedScanner::new(&matcher).map_err(|e| invalid(e.to_string()))?;
        }
        "notify" | "refresh_label_on_discovery" => {
            parse_bool_for(key, value)?;
        }
        "clipboard_backend" => {
            let lower = value.to_lowercase();
            if !VALID_CLIPBOARD_BACKENDS.contains(&lower.as_str()) {
                return Err(invalid(format!(
                    "Invalid value '{}'. Valid options: {}",
                    value,
                    VALID_CLIPBOARD_BACKENDS.join(", ")
                )));
            }
        }
        _ => {} // source and output accept any string
    }
    Ok(())
}

fn parse_bool_for(key: &str, value: &str) -> Result<bool, ConfigError> {
    parse_bool(value).map_err(|_| ConfigError::ValidationError {
        key: key.to_string(),
        message: "Value must be 'true' or 'false'".to_string(),
    })
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}
