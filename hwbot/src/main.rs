//! Hwbot
//!
//! A homework-review status bot: polls the Practicum status API on a fixed
//! interval and relays status changes for the most recent submission to one
//! Telegram chat.
//!
//! Architecture:
//! - Configuration: credentials and settings from the environment
//! - Clients: HTTP access to the status API and the Telegram Bot API
//! - Poller: the fetch → validate → diff → notify → sleep loop
//!
//! Startup aborts on missing credentials; after that no error terminates
//! the process.

mod config;
mod poller;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::poller::StatusPoller;
use hwbot_client::{PracticumClient, TelegramBot};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    info!("Starting hwbot");

    // Load configuration
    let config = Config::from_env();

    if !config.check_tokens() {
        error!("Required environment variables are missing");
        anyhow::bail!(
            "PRACTICUM_TOKEN, TELEGRAM_TOKEN and TELEGRAM_CHAT_ID must all be set and non-empty"
        );
    }

    config.validate()?;
    info!(
        "Loaded configuration: endpoint={}, poll_interval={:?}",
        config.endpoint, config.poll_interval
    );

    // Initialize clients
    let api = PracticumClient::new(config.endpoint.clone(), config.practicum_token.clone());
    let bot = TelegramBot::new(config.telegram_token.clone(), config.chat_id.clone());

    info!("Clients initialized, chat_id={}", bot.chat_id());

    // Start polling loop
    let mut poller = StatusPoller::new(config, api, bot);
    poller.run().await
}

/// Initializes logging to stdout and a local append-only log file
///
/// The filter defaults to `hwbot=info` and honors `RUST_LOG`; the log file
/// path honors `HWBOT_LOG` and defaults to `hwbot.log` in the working
/// directory.
fn init_logging() -> Result<()> {
    let log_path = std::env::var("HWBOT_LOG").unwrap_or_else(|_| "hwbot.log".to_string());
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {log_path}"))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hwbot=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(log_file)),
        )
        .init();

    Ok(())
}
