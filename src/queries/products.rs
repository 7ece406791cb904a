//! Product listing queries over an in-memory catalog.
//!
//! Filtering is a conjunction of a search predicate and a category predicate;
//! sorting happens afterwards with a stable comparator, so products that tie
//! on the sort key keep their fetch order.

use std::fmt;
use std::str::FromStr;

use feruca::Collator;

use crate::config;
use crate::error::{Result, StorefrontError};
use crate::models::Product;

// ---------------------------------------------------------------------------
// SortKey
// ---------------------------------------------------------------------------

/// Ordering applied to the filtered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Keep fetch order.
    #[default]
    Default,
    /// Title, ascending.
    Name,
    /// Price, ascending.
    PriceLow,
    /// Price, descending.
    PriceHigh,
    /// Rating, descending.
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Default,
        SortKey::Name,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
    ];

    /// Wire name used by the sort selector (`"price-low"` etc).
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::Name => "name",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
        }
    }

    /// Human-readable label for the sort selector.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Default => "Default",
            SortKey::Name => "Name A-Z",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Rating => "Highest Rated",
        }
    }

    /// Stable in-place sort of `products` by this key.
    pub fn sort(&self, products: &mut [Product]) {
        match self {
            SortKey::Default => {}
            SortKey::Name => sort_by_title(products),
            SortKey::PriceLow => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortKey::PriceHigh => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortKey::Rating => products.sort_by(|a, b| b.rating.rate.total_cmp(&a.rating.rate)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| StorefrontError::InvalidArgument(format!("Unknown sort key: {}", s)))
    }
}

/// Titles are ordered by the Unicode Collation Algorithm with the CLDR root
/// collation: accents and case only break ties between otherwise equal
/// letters, and lowercase precedes uppercase. Identical titles compare equal.
fn sort_by_title(products: &mut [Product]) {
    let mut collator = Collator::default();
    products.sort_by(|a, b| collator.collate(a.title.as_str(), b.title.as_str()));
}

// ---------------------------------------------------------------------------
// FilterParams
// ---------------------------------------------------------------------------

/// User-controlled listing inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParams {
    /// Case-insensitive substring matched against title or description.
    pub search_term: String,
    /// Exact category, or [`config::ALL_CATEGORIES`] for no category filter.
    pub category: String,
    pub sort_key: SortKey,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: config::ALL_CATEGORIES.to_string(),
            sort_key: SortKey::Default,
        }
    }
}

impl FilterParams {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn sort_by(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Filter `products` by search term and category, then sort.
///
/// Returns a new vector; `products` is never reordered.
pub fn apply_filters(
    products: &[Product],
    search_term: &str,
    category: &str,
    sort_key: SortKey,
) -> Vec<Product> {
    let needle = search_term.to_lowercase();
    let any_category = category == config::ALL_CATEGORIES;

    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|p| p.matches_lowered(&needle))
        .filter(|p| any_category || p.category == category)
        .cloned()
        .collect();

    sort_key.sort(&mut filtered);
    filtered
}

/// Distinct categories in first-seen order.
pub fn derive_categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if !seen.iter().any(|c| c == &product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

/// Display label for a category: first character uppercased, rest untouched.
pub fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// ProductQuery
// ---------------------------------------------------------------------------

/// Query interface over a fetched product collection.
pub struct ProductQuery<'a> {
    products: &'a [Product],
}

impl<'a> ProductQuery<'a> {
    /// Create a new `ProductQuery` over the given collection.
    pub fn new(products: &'a [Product]) -> Self {
        Self { products }
    }

    /// Run the listing filter with the given parameters.
    pub fn search(&self, params: &FilterParams) -> Vec<Product> {
        apply_filters(
            self.products,
            &params.search_term,
            &params.category,
            params.sort_key,
        )
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        derive_categories(self.products)
    }

    pub fn get_by_id(&self, id: u64) -> Option<&'a Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// `(category, count)` pairs in first-seen category order.
    pub fn count_by_category(&self) -> Vec<(String, usize)> {
        self.categories()
            .into_iter()
            .map(|c| {
                let n = self.products.iter().filter(|p| p.category == c).count();
                (c, n)
            })
            .collect()
    }
}
