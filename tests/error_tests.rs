//! Error scenario integration tests

use std::process::Command;

fn embed_harvest_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_embed-harvest"));
    cmd.env("XDG_CONFIG_HOME", "/nonexistent")
        .env_remove("EMBED_HARVEST_SOURCE");
    cmd
}

#[test]
fn missing_source_error() {
    let output = embed_harvest_bin()
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("source"),
        "Expected error about missing source, got: {}",
        stderr
    );
}

#[test]
fn nonexistent_source_file_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("missing.html");

    let output = embed_harvest_bin()
        .arg("--source")
        .arg(&missing)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("missing.html"),
        "Expected error naming the page, got: {}",
        stderr
    );
}

#[test]
fn empty_media_marker_is_usage_error() {
    let output = embed_harvest_bin()
        .args(["--source", "page.html", "--media-marker", ""])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("media_marker"),
        "Expected error about the marker, got: {}",
        stderr
    );
}

#[test]
fn config_get_unknown_key() {
    let output = embed_harvest_bin()
        .args(["config", "get", "unknown_key"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("Valid"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_unknown_key() {
    let output = embed_harvest_bin()
        .args(["config", "set", "unknown_key", "value"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("Valid"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_interval() {
    let output = embed_harvest_bin()
        .args(["config", "set", "watch_interval", "often"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid") || stderr.contains("interval"),
        "Expected error about invalid interval, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_selector() {
    let output = embed_harvest_bin()
        .args(["config", "set", "title_selector", "div["])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("title_selector"),
        "Expected error about the selector, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_boolean() {
    let output = embed_harvest_bin()
        .args(["config", "set", "notify", "maybe"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("true") || stderr.contains("false"),
        "Expected error about invalid boolean, got: {}",
        stderr
    );
}

#[test]
fn config_list_with_no_file() {
    let output = embed_harvest_bin()
        .args(["config", "list"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("not set") && stdout.contains("poll_interval"),
        "Expected config list output, got: {}",
        stdout
    );
}
