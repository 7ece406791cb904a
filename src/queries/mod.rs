//! Query modules for the storefront SDK.
//!
//! Each module provides pure functions and a query struct that borrows an
//! in-memory product collection.

pub mod products;

pub use products::{
    apply_filters, category_label, derive_categories, FilterParams, ProductQuery, SortKey,
};
