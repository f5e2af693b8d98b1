//! Typed client for the catalog endpoints.

use pasar_commerce::catalog::{Event, GiftPackage, Product};

use crate::envelope::extract;
use crate::{ApiConfig, FetchClient, FetchError};

/// Read-only client for products, events, and gift packages.
pub struct CatalogClient {
    client: FetchClient,
}

impl CatalogClient {
    /// Create a client against the configured backend.
    pub fn new(config: ApiConfig) -> Self {
        let mut client = FetchClient::new()
            .with_base_url(config.base_url)
            .with_default_header("Accept", "application/json");
        if let Some(token) = config.access_token {
            client = client.with_default_header("Authorization", format!("Bearer {}", token));
        }
        Self { client }
    }

    /// `GET /api/products` — the shared product catalog.
    pub fn products(&self) -> Result<Vec<Product>, FetchError> {
        extract(self.client.get("/products").send()?)
    }

    /// `GET /api/events` — upcoming bazaar events.
    pub fn events(&self) -> Result<Vec<Event>, FetchError> {
        extract(self.client.get("/events").send()?)
    }

    /// `GET /api/gift-packages` — the curated gift packages.
    pub fn gift_packages(&self) -> Result<Vec<GiftPackage>, FetchError> {
        extract(self.client.get("/gift-packages").send()?)
    }
}
