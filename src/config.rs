use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";
pub const PRODUCTS_PATH: &str = "products";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const MAX_REDIRECTS: usize = 10;

/// Category filter value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

// Offer derivation
pub const OFFER_LIMIT: usize = 12;
pub const DISCOUNT_STEPS: [u32; 9] = [10, 15, 20, 25, 30, 35, 40, 45, 50];
/// Largest jitter added on top of the cyclic discount step (inclusive).
pub const MAX_JITTER: u32 = 9;
pub const FEATURED_COUNT: usize = 3;
pub const LIMITED_TIME_EVERY: usize = 3;

pub const PRODUCTS_FAILURE_MESSAGE: &str = "Failed to fetch products. Please try again.";
pub const OFFERS_FAILURE_MESSAGE: &str = "Failed to fetch offers. Please try again.";

/// Full URL of the products endpoint under `base_url`.
pub fn products_url(base_url: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), PRODUCTS_PATH)
}
