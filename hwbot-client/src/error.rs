//! Error types for the status API client

use thiserror::Error;

/// Result type alias for status API operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when calling the status API
#[derive(Debug, Error)]
pub enum ClientError {
    /// The endpoint could not be reached at all
    #[error("Cannot reach the status endpoint: {0}")]
    Connection(#[source] reqwest::Error),

    /// HTTP request failed for another transport-level reason
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Body text returned by the API
        message: String,
    },

    /// Failed to parse the response body
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ClientError {
    /// Create an API error from status code and body text
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Classify a transport failure, separating connectivity from the rest
    pub(crate) fn from_transport(error: reqwest::Error) -> Self {
        if error.is_connect() {
            Self::Connection(error)
        } else {
            Self::RequestFailed(error)
        }
    }

    /// Check if this error means the endpoint was unreachable
    ///
    /// The polling loop logs these at warn level; an unreachable endpoint is
    /// the one failure expected to clear itself.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_carries_status() {
        let error = ClientError::api_error(500, "boom");
        assert!(matches!(error, ClientError::Api { status: 500, .. }));
        assert!(!error.is_connectivity());
    }

    #[test]
    fn test_api_error_message() {
        let error = ClientError::api_error(500, "internal");
        assert_eq!(error.to_string(), "API error (status 500): internal");
    }
}
