//! Telegram Bot API client
//!
//! Covers the single call the bot needs: delivering a text message to one
//! configured chat. No delivery confirmation is surfaced beyond
//! success/failure.

use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

const DEFAULT_API_ROOT: &str = "https://api.telegram.org";

/// Errors that can occur when sending a notification
#[derive(Debug, Error)]
pub enum TelegramError {
    /// HTTP request to the Bot API failed
    #[error("Telegram request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Bot API returned a non-success status code
    #[error("Telegram API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Body text returned by the Bot API
        message: String,
    },
}

/// `sendMessage` request payload
#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// HTTP client for one bot delivering to one chat
#[derive(Debug, Clone)]
pub struct TelegramBot {
    /// Bot API root (e.g., "https://api.telegram.org")
    api_root: String,
    /// Bot credential token
    token: String,
    /// Destination chat identifier
    chat_id: String,
    /// HTTP client instance
    client: Client,
}

impl TelegramBot {
    /// Create a bot client for the public Telegram Bot API
    ///
    /// # Arguments
    /// * `token` - Bot credential token
    /// * `chat_id` - Identifier of the chat that receives every message
    pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self::with_api_root(DEFAULT_API_ROOT, token, chat_id)
    }

    /// Create a bot client against a custom API root
    pub fn with_api_root(
        api_root: impl Into<String>,
        token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        let api_root = api_root.into();
        Self {
            api_root: api_root.trim_end_matches('/').to_string(),
            token: token.into(),
            chat_id: chat_id.into(),
            client: Client::new(),
        }
    }

    /// Get the chat identifier this bot delivers to
    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    /// Send a text message to the configured chat
    ///
    /// # Errors
    /// Any transport failure or non-success Bot API status becomes a
    /// [`TelegramError`]; the caller decides whether that is fatal (for the
    /// polling loop it never is).
    pub async fn send_message(&self, text: &str) -> Result<(), TelegramError> {
        info!("sending notification to chat {}", self.chat_id);

        let url = format!("{}/bot{}/sendMessage", self.api_root, self.token);
        let response = self
            .client
            .post(&url)
            .json(&SendMessage {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TelegramError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("notification delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_creation() {
        let bot = TelegramBot::new("12345:token", "42");
        assert_eq!(bot.chat_id(), "42");
        assert_eq!(bot.api_root, DEFAULT_API_ROOT);
    }

    #[test]
    fn test_bot_trims_trailing_slash() {
        let bot = TelegramBot::with_api_root("http://localhost:8080/", "t", "42");
        assert_eq!(bot.api_root, "http://localhost:8080");
    }
}
