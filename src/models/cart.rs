use serde::{Deserialize, Serialize};

use super::offer::Offer;
use super::product::Product;

// ---------------------------------------------------------------------------
// CartItem — Payload handed to the cart store
// ---------------------------------------------------------------------------

/// The four fields the cart store receives for an "add item" event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub image: String,
}

impl From<&Product> for CartItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
        }
    }
}

/// Offers go into the cart at their discounted price.
impl From<&Offer> for CartItem {
    fn from(offer: &Offer) -> Self {
        Self {
            id: offer.product.id,
            title: offer.product.title.clone(),
            price: offer.final_price,
            image: offer.product.image.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// CartLine — A cart item with its quantity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub item: CartItem,
    pub quantity: u32,
}
