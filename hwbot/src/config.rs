//! Bot configuration
//!
//! All settings come from the environment and are collected into one value
//! that is passed explicitly to the collaborators that need it. Nothing
//! reads the environment after startup.

use std::time::Duration;

/// Default homework statuses endpoint
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default interval between poll iterations
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(600);

/// Bot configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth credential for the status API
    pub practicum_token: String,

    /// Telegram bot credential
    pub telegram_token: String,

    /// Identifier of the chat that receives notifications
    pub chat_id: String,

    /// Full URL of the homework statuses endpoint
    pub endpoint: String,

    /// How long to sleep between poll iterations
    pub poll_interval: Duration,
}

impl Config {
    /// Reads configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - PRACTICUM_ENDPOINT (optional, default: production endpoint)
    /// - POLL_INTERVAL (optional, seconds, default: 600)
    ///
    /// Missing required values become empty strings so that
    /// [`Config::check_tokens`] reports all of them in one pass instead of
    /// failing on the first.
    pub fn from_env() -> Self {
        let practicum_token = std::env::var("PRACTICUM_TOKEN").unwrap_or_default();
        let telegram_token = std::env::var("TELEGRAM_TOKEN").unwrap_or_default();
        let chat_id = std::env::var("TELEGRAM_CHAT_ID").unwrap_or_default();

        let endpoint =
            std::env::var("PRACTICUM_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let poll_interval = std::env::var("POLL_INTERVAL")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_POLL_INTERVAL);

        Self {
            practicum_token,
            telegram_token,
            chat_id,
            endpoint,
            poll_interval,
        }
    }

    /// Checks that all three required credentials are present
    ///
    /// Returns true only when every one of them is non-empty. A false result
    /// at startup is fatal; the process must not enter the polling loop.
    pub fn check_tokens(&self) -> bool {
        !self.practicum_token.is_empty()
            && !self.telegram_token.is_empty()
            && !self.chat_id.is_empty()
    }

    /// Validates the non-credential settings
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            anyhow::bail!("endpoint must start with http:// or https://");
        }

        if self.poll_interval.as_secs() == 0 {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            practicum_token: "practicum".to_string(),
            telegram_token: "telegram".to_string(),
            chat_id: "42".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    #[test]
    fn test_check_tokens_all_present() {
        assert!(config().check_tokens());
    }

    #[test]
    fn test_check_tokens_any_missing() {
        let mut missing_api = config();
        missing_api.practicum_token = String::new();
        assert!(!missing_api.check_tokens());

        let mut missing_bot = config();
        missing_bot.telegram_token = String::new();
        assert!(!missing_bot.check_tokens());

        let mut missing_chat = config();
        missing_chat.chat_id = String::new();
        assert!(!missing_chat.check_tokens());
    }

    #[test]
    fn test_validate_defaults() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let mut config = config();
        config.endpoint = "not-a-url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let mut config = config();
        config.poll_interval = Duration::from_secs(0);
        assert!(config.validate().is_err());
    }
}
