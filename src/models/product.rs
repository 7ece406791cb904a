use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Rating — Aggregate customer rating attached to a product
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

// ---------------------------------------------------------------------------
// Product — One catalog entry as returned by the catalog source
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub rating: Rating,
}

impl Product {
    /// Case-insensitive substring test against title or description.
    ///
    /// `needle_lower` must already be lowercased; an empty needle matches.
    pub(crate) fn matches_lowered(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty()
            || self.title.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
    }

    /// Price rendered with two decimals and a dollar sign.
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }
}

/// Render an amount the way the listing and offer cards show it (`$12.50`).
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}
