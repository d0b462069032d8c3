//! Status poller
//!
//! The main loop: fetch the latest homework statuses, validate the payload,
//! notify the chat when the picture changed, advance the cursor and sleep.
//! Every error raised inside one iteration is contained at the loop boundary;
//! nothing short of process termination stops the loop.

use anyhow::Result;
use serde_json::Value;
use thiserror::Error;
use tokio::time;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use hwbot_client::{ClientError, PracticumClient, TelegramBot, TelegramError};
use hwbot_core::{ResponseError, check_response, parse_status};

/// Chat text sent when the server reports no submissions at all
const NO_UPDATES_TEXT: &str = "Список работ пуст!";

/// Everything that can go wrong inside one poll iteration
///
/// A closed set so the loop can match on kind. None of these are fatal; the
/// loop logs them, reports them to the chat and carries on.
#[derive(Debug, Error)]
pub enum IterationError {
    /// Fetching the statuses failed (connectivity, HTTP error, bad JSON)
    #[error(transparent)]
    Fetch(#[from] ClientError),

    /// The payload or the record did not have the expected shape
    #[error(transparent)]
    Shape(#[from] ResponseError),

    /// The notification could not be delivered
    #[error(transparent)]
    Notify(#[from] TelegramError),
}

/// Poller that watches the review API and relays changes to one chat
pub struct StatusPoller {
    config: Config,
    api: PracticumClient,
    bot: TelegramBot,
    /// Lower bound passed as `from_date` on the next fetch
    cursor: i64,
    /// The `homeworks` sequence from the last successful iteration
    last_seen: Option<Vec<Value>>,
}

impl StatusPoller {
    /// Creates a poller with the cursor seeded from the current time
    pub fn new(config: Config, api: PracticumClient, bot: TelegramBot) -> Self {
        Self {
            config,
            api,
            bot,
            cursor: chrono::Utc::now().timestamp(),
            last_seen: None,
        }
    }

    /// Runs the polling loop forever
    ///
    /// The first iteration fires immediately, every following one after
    /// `poll_interval`, whether the previous iteration succeeded or not.
    pub async fn run(&mut self) -> Result<()> {
        info!(
            "Starting status poller (interval: {:?})",
            self.config.poll_interval
        );

        let mut interval = time::interval(self.config.poll_interval);

        loop {
            interval.tick().await;

            debug!("Polling homework statuses (from_date: {})", self.cursor);

            if let Err(e) = self.poll_once().await {
                match &e {
                    IterationError::Fetch(fetch) if fetch.is_connectivity() => {
                        warn!("Status endpoint unreachable: {fetch}");
                    }
                    _ => error!("Poll iteration failed: {e}"),
                }
                self.report_failure(&e).await;
            }
        }
    }

    /// Performs a single fetch → validate → diff → notify pass
    ///
    /// The cursor only advances when the whole pass succeeded, so a failed
    /// iteration re-reads the same window on the next tick. The fetched
    /// sequence is recorded before parsing: a record that keeps failing to
    /// parse raises (and alerts) once, not on every tick.
    async fn poll_once(&mut self) -> Result<(), IterationError> {
        let response = self.api.homework_statuses(self.cursor).await?;
        let homeworks = check_response(&response)?;

        if changed(self.last_seen.as_deref(), homeworks) {
            self.last_seen = Some(homeworks.to_vec());
            let text = build_notification(homeworks)?;
            self.bot.send_message(&text).await?;
            info!("Status notification delivered");
        } else {
            debug!("Homework status unchanged");
        }

        self.cursor = next_cursor(&response, self.cursor);
        Ok(())
    }

    /// Reports an iteration failure to the chat, best-effort
    ///
    /// Operational alerts share the chat with status updates, so they carry
    /// a warning tag. A failure of the report itself is only logged.
    async fn report_failure(&self, error: &IterationError) {
        let text = format!("⚠️ Сбой в работе программы: {error}");

        if let Err(send_error) = self.bot.send_message(&text).await {
            error!("Failed to deliver failure report: {send_error}");
        }
    }
}

/// Whether the fetched sequence differs from the last-seen one
///
/// `None` means no iteration has completed yet, which always counts as a
/// change.
fn changed(last_seen: Option<&[Value]>, current: &[Value]) -> bool {
    last_seen != Some(current)
}

/// Builds the chat text for a validated `homeworks` sequence
///
/// An empty sequence has its own fixed text; otherwise the first (most
/// recent) record is formatted.
fn build_notification(homeworks: &[Value]) -> Result<String, ResponseError> {
    match homeworks.first() {
        Some(record) => parse_status(record),
        None => Ok(NO_UPDATES_TEXT.to_string()),
    }
}

/// Next cursor value: the server's `current_date` when present, otherwise
/// the previous cursor
fn next_cursor(response: &Value, current: i64) -> i64 {
    response
        .get("current_date")
        .and_then(Value::as_i64)
        .unwrap_or(current)
}
