//! Promotional offers derived from the head of the catalog.

pub mod deriver;
pub mod jitter;

pub use deriver::{base_discount, derive_offers, max_discount, partition_featured, OfferDeriver};
pub use jitter::{DiscountJitter, FixedJitter, RandomJitter, SeededJitter};
