//! Error types for the edgewatch client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to the collection endpoint.
///
/// During a polling session every variant is recovered locally: the tick
/// that hit it is abandoned and the session keeps running.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the endpoint.
    #[error("API error ({status}) at {url}: {message}")]
    Api {
        status: u16,
        url: String,
        message: String,
    },

    /// Response body was not valid JSON.
    #[error("invalid response body: {0}")]
    InvalidResponse(String),

    /// Invalid base URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}
