//! Error types for the Reddit client.

use thiserror::Error;

/// Reddit client errors
#[derive(Debug, Error)]
pub enum RedditError {
    /// Reddit API returned an error status
    #[error("Reddit API error: {0}")]
    ApiError(String),

    /// Token request rejected or malformed
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Connection error (network, DNS, etc.)
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The user does not exist or is suspended
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Client not connected (connect() must be called first)
    #[error("Client not connected - call connect() first")]
    NotConnected,

    /// Runtime or HTTP client construction failed
    #[error("Client setup error: {0}")]
    Setup(String),
}

impl From<reqwest::Error> for RedditError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            RedditError::ConnectionError(e.to_string())
        } else if e.is_decode() {
            RedditError::InvalidResponse(e.to_string())
        } else if e.is_status() {
            match e.status() {
                Some(status) if status.is_server_error() => {
                    RedditError::ApiError(format!("Server error (HTTP {})", status))
                }
                Some(status) => RedditError::ApiError(format!("HTTP {}: {}", status, e)),
                None => RedditError::ApiError(e.to_string()),
            }
        } else {
            RedditError::ApiError(e.to_string())
        }
    }
}

impl From<serde_json::Error> for RedditError {
    fn from(e: serde_json::Error) -> Self {
        RedditError::InvalidResponse(format!("JSON parsing error: {}", e))
    }
}
