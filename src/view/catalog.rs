//! Product listing view: catalog, filter inputs and the visible projection.

use crate::cart::CartStore;
use crate::config;
use crate::error::{Result, StorefrontError};
use crate::models::{CartItem, Product};
use crate::queries::products::{apply_filters, category_label, derive_categories, ProductQuery};
use crate::queries::{FilterParams, SortKey};
use crate::source::CatalogSource;
use tracing::{debug, info};

use super::{FetchOutcome, FetchState, FetchStatus};

const VIEW: &str = "catalog";

/// State behind the product listing page.
///
/// The visible projection is recomputed in full whenever the collection or
/// any filter input changes.
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    state: FetchState,
    products: Vec<Product>,
    params: FilterParams,
    visible: Vec<Product>,
    categories: Vec<String>,
}

impl CatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Fetch lifecycle ---------------------------------------------------

    pub fn status(&self) -> &FetchStatus {
        self.state.status()
    }

    /// Fetch the catalog from `source` and replace the held collection.
    ///
    /// Failures never propagate: they set [`FetchStatus::Failed`] and keep
    /// the previous collection. Calling this again is the retry.
    pub fn fetch<S: CatalogSource + ?Sized>(&mut self, source: &S) -> FetchOutcome {
        if let Some(skipped) = self.begin_fetch() {
            return skipped;
        }
        let result = source.fetch_products();
        self.complete_fetch(result)
    }

    /// Enter the loading state. Returns `Some` when the fetch must not go
    /// ahead (already pending, or the view is detached).
    pub fn begin_fetch(&mut self) -> Option<FetchOutcome> {
        self.state.begin(VIEW)
    }

    /// Apply the result of a fetch started with [`begin_fetch`](Self::begin_fetch).
    pub fn complete_fetch(&mut self, result: Result<Vec<Product>>) -> FetchOutcome {
        match result {
            Ok(products) => {
                if !self.state.succeed() {
                    return FetchOutcome::Detached;
                }
                let count = products.len();
                self.products = products;
                self.categories = derive_categories(&self.products);
                self.refresh();
                info!(view = VIEW, count, "catalog loaded");
                FetchOutcome::Loaded { count }
            }
            Err(e) => self.state.fail(VIEW, &e, config::PRODUCTS_FAILURE_MESSAGE),
        }
    }

    /// Mark the view as gone; later fetch results are dropped.
    pub fn detach(&mut self) {
        self.state.detach();
    }

    pub fn is_detached(&self) -> bool {
        self.state.is_detached()
    }

    // -- Filter inputs -----------------------------------------------------

    pub fn params(&self) -> &FilterParams {
        &self.params
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.params.search_term = term.into();
        self.refresh();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.params.category = category.into();
        self.refresh();
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.params.sort_key = sort_key;
        self.refresh();
    }

    /// Replace every filter input at once.
    pub fn set_params(&mut self, params: FilterParams) {
        self.params = params;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.visible = apply_filters(
            &self.products,
            &self.params.search_term,
            &self.params.category,
            self.params.sort_key,
        );
        debug!(
            view = VIEW,
            visible = self.visible.len(),
            total = self.products.len(),
            "projection recomputed"
        );
    }

    // -- Read access -------------------------------------------------------

    /// The full fetched collection, in fetch order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The filtered, sorted projection for display.
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    /// Distinct categories of the held collection, first-seen order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// `(value, label)` pairs for the category selector, "all" first.
    pub fn category_options(&self) -> Vec<(String, String)> {
        std::iter::once((config::ALL_CATEGORIES.to_string(), "All Categories".to_string()))
            .chain(self.categories.iter().map(|c| (c.clone(), category_label(c))))
            .collect()
    }

    pub fn query(&self) -> ProductQuery<'_> {
        ProductQuery::new(&self.products)
    }

    // -- Cart --------------------------------------------------------------

    /// Hand the product with `id` to `cart` at its list price.
    pub fn add_to_cart(&self, id: u64, cart: &mut dyn CartStore) -> Result<CartItem> {
        let product = self
            .query()
            .get_by_id(id)
            .ok_or_else(|| StorefrontError::NotFound(format!("Product {} is not in the catalog", id)))?;
        let item = CartItem::from(product);
        cart.add_item(item.clone());
        Ok(item)
    }
}
