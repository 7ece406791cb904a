//! Storefront SDK for Rust.
//!
//! Fetches a public product catalog in one call, derives the filtered and
//! sorted listing a products page shows, derives discounted offers for an
//! offers page, and hands chosen items to a cart store.
//!
//! # Quick start
//!
//! ```no_run
//! use storefront_sdk::{InMemoryCart, SortKey, StorefrontSdk};
//!
//! let sdk = StorefrontSdk::builder().build().unwrap();
//!
//! // Listing page
//! let mut catalog = sdk.catalog();
//! sdk.refresh(&mut catalog);
//! catalog.set_search_term("jacket");
//! catalog.set_sort_key(SortKey::PriceLow);
//!
//! // Offers page
//! let mut offers = sdk.offers();
//! offers.fetch(sdk.source());
//!
//! let mut cart = InMemoryCart::new();
//! if let Some(first) = catalog.visible().first() {
//!     catalog.add_to_cart(first.id, &mut cart).unwrap();
//! }
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod cart;
pub mod config;
pub mod error;
pub mod models;
pub mod offers;
pub mod queries;
pub mod session;
pub mod source;
pub mod view;

#[cfg(feature = "async")]
pub use async_client::{AsyncCatalogView, AsyncOffersView, AsyncStorefrontSdk};
pub use cart::{CartStore, InMemoryCart};
pub use error::{Result, StorefrontError};
pub use models::{CartItem, CartLine, Offer, Product, Rating, User};
pub use offers::{DiscountJitter, FixedJitter, OfferDeriver, RandomJitter, SeededJitter};
pub use queries::{FilterParams, ProductQuery, SortKey};
pub use session::{InMemorySession, Session};
pub use source::{CatalogSource, HttpCatalogSource};
pub use view::{CatalogView, FetchOutcome, FetchStatus, OffersView};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// StorefrontSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`StorefrontSdk`] instance.
///
/// Use [`StorefrontSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](StorefrontSdkBuilder::build) to create the SDK.
pub struct StorefrontSdkBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for StorefrontSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl StorefrontSdkBuilder {
    /// Point the SDK at a different catalog API.
    ///
    /// Defaults to [`config::DEFAULT_BASE_URL`]; the products path is appended.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the HTTP request timeout for catalog reads.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the SDK. No request is made until a view is fetched.
    pub fn build(self) -> Result<StorefrontSdk> {
        let source = HttpCatalogSource::new(self.base_url, self.timeout)?;
        Ok(StorefrontSdk { source })
    }
}

// ---------------------------------------------------------------------------
// StorefrontSdk
// ---------------------------------------------------------------------------

/// The main entry point for the storefront SDK.
///
/// Owns the HTTP [`CatalogSource`] and creates page views. Views are plain
/// state; fetching them goes through [`refresh`](Self::refresh) or their own
/// `fetch` with any source.
pub struct StorefrontSdk {
    source: HttpCatalogSource,
}

impl StorefrontSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> StorefrontSdkBuilder {
        StorefrontSdkBuilder::default()
    }

    /// The catalog source backing this SDK.
    pub fn source(&self) -> &HttpCatalogSource {
        &self.source
    }

    /// Read the full catalog once, without any view state.
    pub fn fetch_products(&self) -> Result<Vec<Product>> {
        self.source.fetch_products()
    }

    // -- View constructors -------------------------------------------------

    /// A fresh, idle listing view.
    pub fn catalog(&self) -> CatalogView {
        CatalogView::new()
    }

    /// A fresh, idle offers view with unseeded discount jitter.
    pub fn offers(&self) -> OffersView<RandomJitter> {
        OffersView::default()
    }

    /// A fresh, idle offers view using `jitter` for discounts.
    pub fn offers_with<J: DiscountJitter>(&self, jitter: J) -> OffersView<J> {
        OffersView::new(OfferDeriver::new(jitter))
    }

    /// Fetch `view` from this SDK's source (initial load or retry).
    pub fn refresh(&self, view: &mut CatalogView) -> FetchOutcome {
        view.fetch(&self.source)
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for StorefrontSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StorefrontSdk(endpoint={})", self.source.products_url())
    }
}
