use serde::{Deserialize, Serialize};

use super::product::{format_price, Product};

// ---------------------------------------------------------------------------
// Offer — A product annotated with a derived discount and display flags
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: u64,
    pub product: Product,
    pub original_price: f64,
    pub discount_percent: u32,
    pub final_price: f64,
    pub is_limited_time: bool,
    pub is_featured: bool,
}

impl Offer {
    /// Amount saved against the original price.
    pub fn savings(&self) -> f64 {
        self.original_price - self.final_price
    }

    pub fn display_final_price(&self) -> String {
        format_price(self.final_price)
    }

    pub fn display_original_price(&self) -> String {
        format_price(self.original_price)
    }

    pub fn display_savings(&self) -> String {
        format_price(self.savings())
    }
}
