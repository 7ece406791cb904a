//! Offer derivation.
//!
//! Turns the head of a fetched catalog into promotional offers: a cyclic base
//! discount plus jitter, and positional featured / limited-time flags.

use crate::config;
use crate::models::{Offer, Product};

use super::jitter::{DiscountJitter, RandomJitter};

/// Derives offers from a product collection using a jitter source `J`.
pub struct OfferDeriver<J = RandomJitter> {
    jitter: J,
}

impl Default for OfferDeriver<RandomJitter> {
    fn default() -> Self {
        Self::new(RandomJitter)
    }
}

impl<J: DiscountJitter> OfferDeriver<J> {
    pub fn new(jitter: J) -> Self {
        Self { jitter }
    }

    /// Derive offers for the first [`config::OFFER_LIMIT`] products, in order.
    pub fn derive(&mut self, products: &[Product]) -> Vec<Offer> {
        products
            .iter()
            .take(config::OFFER_LIMIT)
            .enumerate()
            .map(|(index, product)| {
                let jitter = self.jitter.jitter(index, product).min(config::MAX_JITTER);
                build_offer(index, product, base_discount(index) + jitter)
            })
            .collect()
    }
}

/// Derive offers with unseeded randomness.
pub fn derive_offers(products: &[Product]) -> Vec<Offer> {
    OfferDeriver::<RandomJitter>::default().derive(products)
}

/// Cyclic discount step for the offer at `index`.
pub fn base_discount(index: usize) -> u32 {
    config::DISCOUNT_STEPS[index % config::DISCOUNT_STEPS.len()]
}

fn build_offer(index: usize, product: &Product, discount_percent: u32) -> Offer {
    let final_price = product.price * (1.0 - f64::from(discount_percent) / 100.0);
    Offer {
        id: product.id,
        product: product.clone(),
        original_price: product.price,
        discount_percent,
        final_price,
        is_limited_time: index % config::LIMITED_TIME_EVERY == 0,
        is_featured: index < config::FEATURED_COUNT,
    }
}

/// Split offers into `(featured, regular)`, keeping relative order in each.
pub fn partition_featured(offers: &[Offer]) -> (Vec<Offer>, Vec<Offer>) {
    offers.iter().cloned().partition(|o| o.is_featured)
}

/// Largest discount among `offers`, for the "up to X% off" headline.
pub fn max_discount(offers: &[Offer]) -> u32 {
    offers.iter().map(|o| o.discount_percent).max().unwrap_or(0)
}
