//! The `{ success, message, data }` envelope both backend services speak.

use crate::FetchError;
use serde::Deserialize;

/// Standard response envelope of the order and catalog services.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable message, set on both success and failure.
    #[serde(default)]
    pub message: Option<String>,
    /// The payload, absent on failure.
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload, turning `success: false` or missing data into an
    /// error carrying the service's message.
    pub fn into_data(self) -> Result<T, FetchError> {
        if !self.success {
            return Err(FetchError::Api(
                self.message.unwrap_or_else(|| "request failed".to_string()),
            ));
        }
        self.data
            .ok_or_else(|| FetchError::Api("response carried no data".to_string()))
    }
}

/// Unwrap an enveloped response body.
///
/// The services answer with the envelope on error statuses too, so the
/// body is tried first to preserve the service's message; only when it is
/// not an envelope does the HTTP status decide.
pub fn extract<T: serde::de::DeserializeOwned>(
    response: crate::Response,
) -> Result<T, FetchError> {
    match response.json::<ApiResponse<T>>() {
        Ok(envelope) => envelope.into_data(),
        Err(_) => {
            let response = response.error_for_status()?;
            response.json::<ApiResponse<T>>()?.into_data()
        }
    }
}
