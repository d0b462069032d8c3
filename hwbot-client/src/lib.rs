//! Hwbot HTTP Clients
//!
//! Thin, type-safe HTTP clients for the two external services the bot talks
//! to: the Practicum homework status API and the Telegram Bot API.
//!
//! Both clients hold a single `reqwest::Client` and surface failures as
//! closed error enums so the polling loop can match on kind instead of
//! inspecting message strings.
//!
//! # Example
//!
//! ```no_run
//! use hwbot_client::PracticumClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PracticumClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "my-oauth-token",
//!     );
//!
//!     let response = client.homework_statuses(0).await?;
//!     println!("payload: {response}");
//!     Ok(())
//! }
//! ```

pub mod error;
mod statuses;
pub mod telegram;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use telegram::{TelegramBot, TelegramError};

use reqwest::Client;
use serde_json::Value;

/// HTTP client for the Practicum homework status API
///
/// Issues authenticated requests against a fixed status endpoint. The body
/// is returned as raw JSON; shape validation is the caller's job (see
/// `hwbot_core::check_response`), the client only guarantees transport
/// success and a parseable body.
#[derive(Debug, Clone)]
pub struct PracticumClient {
    /// Full URL of the status endpoint
    endpoint: String,
    /// OAuth credential sent with every request
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new status API client
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the homework statuses endpoint
    /// * `token` - OAuth credential for the `Authorization` header
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client: Client::new(),
        }
    }

    /// Create a client with a custom HTTP client
    ///
    /// This allows configuring timeouts, proxies or TLS settings. The default
    /// constructor keeps reqwest's defaults, which include no overall request
    /// timeout.
    ///
    /// # Example
    /// ```
    /// use hwbot_client::PracticumClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = PracticumClient::with_client("https://example.com/statuses/", "token", http_client);
    /// ```
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint URL this client targets
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Handle an API response and parse the JSON body
    ///
    /// Checks the status code first: a non-success status becomes
    /// [`ClientError::Api`] carrying the code and the body text. A success
    /// status with an unparseable body becomes [`ClientError::Parse`].
    async fn handle_response(&self, response: reqwest::Response) -> Result<Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("Failed to parse JSON response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PracticumClient::new("https://example.com/statuses/", "token");
        assert_eq!(client.endpoint(), "https://example.com/statuses/");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client =
            PracticumClient::with_client("https://example.com/statuses/", "token", http_client);
        assert_eq!(client.endpoint(), "https://example.com/statuses/");
    }
}
