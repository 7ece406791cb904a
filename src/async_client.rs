//! Async wrapper around the storefront views for use in async runtimes (Tokio, etc.).
//!
//! Catalog reads run on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free. Views
//! live behind a [`Mutex`] that is never held across an `.await`.
//!
//! # Example
//!
//! ```no_run
//! use storefront_sdk::AsyncStorefrontSdk;
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncStorefrontSdk::builder().build().await.unwrap();
//!
//!     let catalog = sdk.catalog();
//!     catalog.fetch().await.unwrap();
//!     let titles = catalog.read(|v| {
//!         v.visible().iter().map(|p| p.title.clone()).collect::<Vec<_>>()
//!     }).unwrap();
//! }
//! ```

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::config;
use crate::error::{Result, StorefrontError};
use crate::models::Product;
use crate::offers::{DiscountJitter, OfferDeriver, RandomJitter};
use crate::source::{CatalogSource, HttpCatalogSource};
use crate::view::{CatalogView, FetchOutcome, OffersView};

type SharedSource = Arc<dyn CatalogSource + Send + Sync>;

// ---------------------------------------------------------------------------
// AsyncStorefrontSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncStorefrontSdk`] instance.
pub struct AsyncStorefrontSdkBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for AsyncStorefrontSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl AsyncStorefrontSdkBuilder {
    /// Point the SDK at a different catalog API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the HTTP request timeout for catalog reads.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the async SDK.
    ///
    /// The blocking HTTP client is constructed on the blocking thread pool so
    /// it won't block the async event loop.
    pub async fn build(self) -> Result<AsyncStorefrontSdk> {
        tokio::task::spawn_blocking(move || {
            let source = HttpCatalogSource::new(self.base_url, self.timeout)?;
            Ok(AsyncStorefrontSdk::from_source(source))
        })
        .await
        .map_err(task_failed)?
    }
}

// ---------------------------------------------------------------------------
// AsyncStorefrontSdk
// ---------------------------------------------------------------------------

/// Async counterpart of [`StorefrontSdk`](crate::StorefrontSdk).
///
/// Hands out [`AsyncView`] handles that share this SDK's catalog source.
#[derive(Clone)]
pub struct AsyncStorefrontSdk {
    source: SharedSource,
}

impl AsyncStorefrontSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncStorefrontSdkBuilder {
        AsyncStorefrontSdkBuilder::default()
    }

    /// Wrap any thread-safe catalog source.
    pub fn from_source<S>(source: S) -> Self
    where
        S: CatalogSource + Send + Sync + 'static,
    {
        Self {
            source: Arc::new(source),
        }
    }

    /// Read the full catalog once on the blocking pool.
    pub async fn fetch_products(&self) -> Result<Vec<Product>> {
        let source = self.source.clone();
        tokio::task::spawn_blocking(move || source.fetch_products())
            .await
            .map_err(task_failed)?
    }

    /// A fresh, idle listing view.
    pub fn catalog(&self) -> AsyncCatalogView {
        AsyncView::new(CatalogView::new(), self.source.clone())
    }

    /// A fresh, idle offers view with unseeded discount jitter.
    pub fn offers(&self) -> AsyncOffersView<RandomJitter> {
        AsyncView::new(OffersView::default(), self.source.clone())
    }

    /// A fresh, idle offers view using `jitter` for discounts.
    pub fn offers_with<J>(&self, jitter: J) -> AsyncOffersView<J>
    where
        J: DiscountJitter + Send + 'static,
    {
        AsyncView::new(OffersView::new(OfferDeriver::new(jitter)), self.source.clone())
    }
}

// ---------------------------------------------------------------------------
// AsyncView
// ---------------------------------------------------------------------------

/// Views that fetch in two steps so the network read can happen off-lock.
pub trait Fetchable {
    fn begin_fetch(&mut self) -> Option<FetchOutcome>;
    fn complete_fetch(&mut self, result: Result<Vec<Product>>) -> FetchOutcome;
    fn detach(&mut self);
}

impl Fetchable for CatalogView {
    fn begin_fetch(&mut self) -> Option<FetchOutcome> {
        CatalogView::begin_fetch(self)
    }

    fn complete_fetch(&mut self, result: Result<Vec<Product>>) -> FetchOutcome {
        CatalogView::complete_fetch(self, result)
    }

    fn detach(&mut self) {
        CatalogView::detach(self)
    }
}

impl<J: DiscountJitter> Fetchable for OffersView<J> {
    fn begin_fetch(&mut self) -> Option<FetchOutcome> {
        OffersView::begin_fetch(self)
    }

    fn complete_fetch(&mut self, result: Result<Vec<Product>>) -> FetchOutcome {
        OffersView::complete_fetch(self, result)
    }

    fn detach(&mut self) {
        OffersView::detach(self)
    }
}

pub type AsyncCatalogView = AsyncView<CatalogView>;
pub type AsyncOffersView<J = RandomJitter> = AsyncView<OffersView<J>>;

/// Shared handle to a view whose fetches run on the blocking pool.
///
/// Clones share the same view. A fetch requested while another is pending
/// returns [`FetchOutcome::AlreadyInFlight`]; after [`detach`](Self::detach)
/// any result still in flight is dropped.
pub struct AsyncView<V> {
    view: Arc<Mutex<V>>,
    source: SharedSource,
}

impl<V> Clone for AsyncView<V> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
            source: self.source.clone(),
        }
    }
}

impl<V: Fetchable + Send + 'static> AsyncView<V> {
    fn new(view: V, source: SharedSource) -> Self {
        Self {
            view: Arc::new(Mutex::new(view)),
            source,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, V>> {
        lock_view(&self.view)
    }

    /// Fetch the catalog and apply it to the view.
    ///
    /// The read and its completion run in a spawned task, so dropping this
    /// future (a timeout, `select!`, an unmount) still moves the view out of
    /// `Loading` once the source answers.
    pub async fn fetch(&self) -> Result<FetchOutcome> {
        let skipped = self.lock()?.begin_fetch();
        if let Some(skipped) = skipped {
            return Ok(skipped);
        }

        let view = self.view.clone();
        let source = self.source.clone();
        let settle = tokio::spawn(async move {
            let result = tokio::task::spawn_blocking(move || source.fetch_products())
                .await
                .unwrap_or_else(|e| Err(task_failed(e)));
            lock_view(&view).map(|mut view| view.complete_fetch(result))
        });

        settle.await.map_err(task_failed)?
    }

    /// Run `f` against the current view state.
    pub fn read<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&V) -> T,
    {
        let guard = self.lock()?;
        Ok(f(&guard))
    }

    /// Run `f` with mutable access, e.g. to change filter inputs.
    pub fn update<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut V) -> T,
    {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }

    /// Mark the view as unmounted; pending fetch results are discarded.
    pub fn detach(&self) -> Result<()> {
        self.lock()?.detach();
        Ok(())
    }
}

fn lock_view<V>(view: &Mutex<V>) -> Result<MutexGuard<'_, V>> {
    view.lock()
        .map_err(|_| StorefrontError::InvalidArgument("View lock poisoned".into()))
}

fn task_failed(e: tokio::task::JoinError) -> StorefrontError {
    StorefrontError::Task(e.to_string())
}
