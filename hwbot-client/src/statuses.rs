//! Homework status endpoint

use serde_json::Value;
use tracing::debug;

use crate::PracticumClient;
use crate::error::{ClientError, Result};

impl PracticumClient {
    /// Fetch homework statuses changed since the given timestamp
    ///
    /// Issues `GET <endpoint>?from_date=<ts>` with an `OAuth <token>`
    /// authorization header and returns the parsed JSON body as-is.
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp; only submissions updated at or after
    ///   this moment are reported
    ///
    /// # Errors
    /// * [`ClientError::Connection`] when the endpoint is unreachable
    /// * [`ClientError::Api`] for any non-success HTTP status
    /// * [`ClientError::Parse`] when the body is not valid JSON
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        debug!("status request sent (http {})", response.status());

        self.handle_response(response).await
    }
}
