//! HTTP client and backend service clients for the Pasar UMKM storefront.
//!
//! Provides a simple, ergonomic API for making outbound requests with
//! automatic JSON handling, plus typed clients for the order and catalog
//! services, which both answer in a `{ success, message, data }` envelope.
//!
//! # Example
//!
//! ```rust,ignore
//! use pasar_data::{ApiConfig, OrderServiceClient};
//!
//! let client = OrderServiceClient::new(ApiConfig::default());
//!
//! // One order per seller partition at checkout
//! let order = client.create_order(&user_id, &request)?;
//!
//! // Order history for the tracker
//! let orders = client.user_orders(&user_id)?;
//! ```

mod catalog;
mod config;
mod envelope;
mod error;
mod orders;
mod request;
mod response;

pub use catalog::CatalogClient;
pub use config::ApiConfig;
pub use envelope::{extract, ApiResponse};
pub use error::FetchError;
pub use orders::OrderServiceClient;
pub use request::{Method, RequestBuilder};
pub use response::Response;

/// HTTP client for making outbound requests.
///
/// A lightweight builder around the platform HTTP client: on `wasm32`
/// requests go out through Spin's outbound HTTP; on native targets `send`
/// is an inert stub, and the domain crate is exercised against in-memory
/// gateways instead.
pub struct FetchClient {
    base_url: Option<String>,
    default_headers: std::collections::HashMap<String, String>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            base_url: None,
            default_headers: std::collections::HashMap::new(),
        }
    }

    /// Create a client with a base URL prepended to all request paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a PUT request.
    pub fn put(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Put, url)
    }

    /// Create a DELETE request.
    pub fn delete(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Delete, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let full_url = join_url(self.base_url.as_deref(), &url.into());
        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }
        ClientRequestBuilder { builder }
    }
}

/// Prepend the base URL unless the path is already absolute.
fn join_url(base: Option<&str>, url: &str) -> String {
    match base {
        Some(base) if !url.starts_with("http://") && !url.starts_with("https://") => {
            format!("{}{}", base.trim_end_matches('/'), url)
        }
        _ => url.to_string(),
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Send the request and return the response.
    #[cfg(target_arch = "wasm32")]
    pub fn send(self) -> Result<Response, FetchError> {
        use spin_sdk::http::{Method as SpinMethod, Request};

        let method = match self.builder.method {
            Method::Get => SpinMethod::Get,
            Method::Post => SpinMethod::Post,
            Method::Put => SpinMethod::Put,
            Method::Patch => SpinMethod::Patch,
            Method::Delete => SpinMethod::Delete,
        };

        let mut request = Request::builder();
        request.method(method);
        request.uri(&self.builder.url);

        for (key, value) in &self.builder.headers {
            request.header(key.as_str(), value.as_str());
        }

        let request = if let Some(body) = self.builder.body {
            request
                .body(body)
                .map_err(|e| FetchError::RequestError(e.to_string()))?
        } else {
            request.build()
        };

        let response = spin_sdk::http::send(request)
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        let status = response.status();
        let headers: std::collections::HashMap<String, String> = response
            .headers()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.into_body();

        Ok(Response::new(status, headers, body))
    }

    /// Send the request and return the response (non-WASM stub).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn send(self) -> Result<Response, FetchError> {
        // Inert response for non-WASM builds (testing/development).
        Ok(Response::new(
            200,
            std::collections::HashMap::new(),
            Vec::new(),
        ))
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        ApiConfig, ApiResponse, CatalogClient, FetchClient, FetchError, Method,
        OrderServiceClient, Response,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_prepends_base() {
        assert_eq!(
            join_url(Some("http://localhost:8000/api"), "/orders"),
            "http://localhost:8000/api/orders"
        );
        assert_eq!(
            join_url(Some("http://localhost:8000/api/"), "/orders"),
            "http://localhost:8000/api/orders"
        );
    }

    #[test]
    fn test_join_url_leaves_absolute_urls() {
        assert_eq!(
            join_url(Some("http://localhost:8000/api"), "https://cdn.example.com/img.png"),
            "https://cdn.example.com/img.png"
        );
        assert_eq!(join_url(None, "/orders"), "/orders");
    }
}
