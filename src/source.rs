//! Catalog source: the HTTP data provider that returns the whole product
//! collection in one call.
//!
//! The endpoint takes no parameters and has no pagination, so a read is
//! all-or-nothing. Views depend on the [`CatalogSource`] trait rather than on
//! the HTTP client so tests can substitute scripted sources.

use crate::config;
use crate::error::{Result, StorefrontError};
use crate::models::Product;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Anything that can produce the full product catalog.
pub trait CatalogSource {
    /// Read the entire catalog. Any transport failure, non-success status or
    /// undecodable body is an error.
    fn fetch_products(&self) -> Result<Vec<Product>>;
}

impl<S: CatalogSource + ?Sized> CatalogSource for &S {
    fn fetch_products(&self) -> Result<Vec<Product>> {
        (**self).fetch_products()
    }
}

impl<S: CatalogSource + ?Sized> CatalogSource for std::sync::Arc<S> {
    fn fetch_products(&self) -> Result<Vec<Product>> {
        (**self).fetch_products()
    }
}

/// Reads the catalog from the public product API over HTTP.
pub struct HttpCatalogSource {
    /// Base URL of the API (the products path is appended).
    pub base_url: String,
    client: Client,
}

impl HttpCatalogSource {
    /// Create a source for `base_url` with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(config::MAX_REDIRECTS))
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Full URL of the products endpoint.
    pub fn products_url(&self) -> String {
        config::products_url(&self.base_url)
    }
}

impl CatalogSource for HttpCatalogSource {
    fn fetch_products(&self) -> Result<Vec<Product>> {
        let url = self.products_url();
        debug!(%url, "fetching catalog");

        let resp = self.client.get(&url).send().map_err(|e| {
            warn!(%url, error = %e, "catalog request failed");
            StorefrontError::from(e)
        })?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "catalog source returned non-success status");
            return Err(StorefrontError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = resp.bytes()?;
        let products: Vec<Product> = serde_json::from_slice(&body).map_err(|e| {
            warn!(%url, error = %e, "catalog body did not decode");
            StorefrontError::from(e)
        })?;

        debug!(%url, count = products.len(), "catalog fetched");
        Ok(products)
    }
}
