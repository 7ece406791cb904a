//! Cart store boundary.
//!
//! Views hand items to a [`CartStore`] passed in by the caller; how the store
//! coalesces or counts items is the store's own business.

use crate::models::{CartItem, CartLine};
use tracing::debug;

/// The cart store the storefront adds items to.
pub trait CartStore {
    fn add_item(&mut self, item: CartItem);

    /// Remove every unit of the item with `id`. Returns whether a line was removed.
    fn remove_item(&mut self, id: u64) -> bool;

    /// Total number of units in the cart (what the cart badge shows).
    fn total_items(&self) -> u32;
}

/// In-memory cart: one line per product id, repeated adds bump the quantity.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCart {
    lines: Vec<CartLine>,
}

impl InMemoryCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cart lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Sum of price × quantity over all lines.
    pub fn total_price(&self) -> f64 {
        self.lines
            .iter()
            .map(|l| l.item.price * f64::from(l.quantity))
            .sum()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl CartStore for InMemoryCart {
    fn add_item(&mut self, item: CartItem) {
        match self.lines.iter_mut().find(|l| l.item.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine { item, quantity: 1 }),
        }
        debug!(total = self.total_items(), "cart item added");
    }

    fn remove_item(&mut self, id: u64) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.item.id != id);
        before != self.lines.len()
    }

    fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}
