// Glide - animated selectable list for the terminal
//
// A demonstration of a reusable list component: pointer and keyboard
// selection, keyboard-driven smooth autoscroll, viewport visibility
// tracking for entrance animation, and edge fades hinting at overflow.
//
// Architecture:
// - list: the rendering-agnostic core (selection, autoscroll, visibility,
//   fades) operating in abstract content units
// - tui (ratatui): maps terminal rows onto the list and renders it
// - demo: seeds the item catalog and replaces it live when configured
// - logging: tracing capture into an in-memory buffer for the logs panel

mod cli;
mod config;
mod demo;
mod list;
mod logging;
mod tui;

use anyhow::Result;
use clap::Parser;
use config::Config;
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Subcommands (config --show/--path/--reset) exit early
    if cli::handle_command(&args) {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::load();
    args.apply_to(&mut config);

    // Logs go to the in-memory buffer so they never garble the alternate
    // screen; file logging is opt-in on top.
    // Precedence: RUST_LOG env var > config file > default "info"
    let log_buffer = LogBuffer::new();
    let default_filter = format!("glide={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must stay alive for the duration of the program so file
    // logs flush on exit
    let _file_guard = if config.logging.file_enabled {
        let appender = match config.logging.file_rotation {
            config::LogRotation::Hourly => tracing_appender::rolling::hourly(
                &config.logging.file_dir,
                &config.logging.file_prefix,
            ),
            config::LogRotation::Daily => tracing_appender::rolling::daily(
                &config.logging.file_dir,
                &config.logging.file_prefix,
            ),
            config::LogRotation::Never => tracing_appender::rolling::never(
                &config.logging.file_dir,
                format!("{}.log", config.logging.file_prefix),
            ),
        };
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::registry()
            .with(filter)
            .with(TuiLogLayer::new(log_buffer.clone()))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false),
            )
            .init();
        Some(guard)
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(TuiLogLayer::new(log_buffer.clone()))
            .init();
        None
    };

    tracing::info!("glide v{} starting", config::VERSION);
    tui::run_tui(config, log_buffer).await
}
