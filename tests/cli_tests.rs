//! CLI integration tests

use std::process::Command;

fn embed_harvest_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_embed-harvest"));
    cmd.env("XDG_CONFIG_HOME", "/nonexistent")
        .env_remove("EMBED_HARVEST_SOURCE");
    cmd
}

#[test]
fn help_output() {
    let output = embed_harvest_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("clipboard"));
    assert!(stdout.contains("--source"));
    assert!(stdout.contains("--poll-interval"));
    assert!(stdout.contains("--watch-interval"));
    assert!(stdout.contains("--media-marker"));
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("--notify"));
    assert!(stdout.contains("--refresh-label"));
}

#[test]
fn version_output() {
    let output = embed_harvest_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("embed-harvest"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = embed_harvest_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("embed-harvest"));
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_help() {
    let output = embed_harvest_bin()
        .args(["config", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("init"));
    assert!(stdout.contains("set"));
    assert!(stdout.contains("get"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("path"));
}

#[test]
fn config_set_then_get() {
    let dir = tempfile::tempdir().expect("tempdir");

    let set = embed_harvest_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "set", "media_marker", "cdn.example"])
        .output()
        .expect("Failed to execute command");
    assert!(set.status.success());

    let get = embed_harvest_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "get", "media_marker"])
        .output()
        .expect("Failed to execute command");
    assert!(get.status.success());
    assert_eq!(String::from_utf8_lossy(&get.stdout).trim(), "cdn.example");
}

#[test]
fn invalid_poll_interval_error() {
    let output = embed_harvest_bin()
        .args(["--source", "page.html", "--poll-interval", "invalid"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid poll-interval"),
        "Expected error about invalid interval, got: {}",
        stderr
    );
}

#[test]
fn invalid_clipboard_backend_rejected_by_parser() {
    let output = embed_harvest_bin()
        .args(["--clipboard-backend", "xclip"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid value"),
        "Expected clap value error, got: {}",
        stderr
    );
}
