//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when talking to the backend services.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// HTTP error response.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Failed to parse the response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The service answered `success: false` or sent no data.
    #[error("Service error: {0}")]
    Api(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::JsonError(e.to_string())
    }
}

impl From<FetchError> for pasar_commerce::MarketError {
    fn from(e: FetchError) -> Self {
        pasar_commerce::MarketError::Transport(e.to_string())
    }
}
