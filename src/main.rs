//! EmbedHarvest CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use embed_harvest::cli::{
    app::{harvest_options, load_merged_config, run_harvest, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use embed_harvest::domain::config::AppConfig;
use embed_harvest::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        source: cli.source,
        poll_interval: cli.poll_interval,
        watch_interval: cli.watch_interval,
        embed_host: cli.embed_host,
        title_selector: cli.title_selector,
        media_marker: cli.media_marker,
        media_extension: cli.media_extension,
        notify: if cli.notify { Some(true) } else { None },
        output: cli.output,
        refresh_label_on_discovery: if cli.refresh_label { Some(true) } else { None },
        clipboard_backend: cli.clipboard_backend.map(|b| b.as_str().to_string()),
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    let options = match harvest_options(&config) {
        Ok(options) => options,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(e.exit_code());
        }
    };

    run_harvest(options).await
}

/// Diagnostics go to stderr, filtered by RUST_LOG (default: warn)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
