//! Backend endpoint configuration.

use serde::{Deserialize, Serialize};

/// Where the backend API lives and how to authenticate against it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL prepended to every request path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Access token from the identity provider, sent as a bearer token
    /// when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: None,
        }
    }
}

impl ApiConfig {
    /// Point at a different backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Attach the signed-in user's access token.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_backend() {
        assert_eq!(ApiConfig::default().base_url, "http://localhost:8000/api");
    }

    #[test]
    fn test_missing_field_uses_default() {
        let config: ApiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ApiConfig::default());
    }
}
