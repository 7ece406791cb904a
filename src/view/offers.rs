//! Offers page view.

use crate::cart::CartStore;
use crate::config;
use crate::error::{Result, StorefrontError};
use crate::models::{CartItem, Offer, Product};
use crate::offers::{max_discount, DiscountJitter, OfferDeriver, RandomJitter};
use crate::source::CatalogSource;
use tracing::info;

use super::{FetchOutcome, FetchState, FetchStatus};

const VIEW: &str = "offers";

/// State behind the offers page: offers derived from the latest catalog fetch.
pub struct OffersView<J = RandomJitter> {
    state: FetchState,
    deriver: OfferDeriver<J>,
    offers: Vec<Offer>,
}

impl Default for OffersView<RandomJitter> {
    fn default() -> Self {
        Self::new(OfferDeriver::default())
    }
}

impl<J: DiscountJitter> OffersView<J> {
    pub fn new(deriver: OfferDeriver<J>) -> Self {
        Self {
            state: FetchState::default(),
            deriver,
            offers: Vec::new(),
        }
    }

    pub fn status(&self) -> &FetchStatus {
        self.state.status()
    }

    /// Fetch the catalog and re-derive offers from it.
    ///
    /// On failure the previously derived offers are kept.
    pub fn fetch<S: CatalogSource + ?Sized>(&mut self, source: &S) -> FetchOutcome {
        if let Some(skipped) = self.begin_fetch() {
            return skipped;
        }
        let result = source.fetch_products();
        self.complete_fetch(result)
    }

    pub fn begin_fetch(&mut self) -> Option<FetchOutcome> {
        self.state.begin(VIEW)
    }

    pub fn complete_fetch(&mut self, result: Result<Vec<Product>>) -> FetchOutcome {
        match result {
            Ok(products) => {
                if !self.state.succeed() {
                    return FetchOutcome::Detached;
                }
                self.offers = self.deriver.derive(&products);
                let count = self.offers.len();
                info!(view = VIEW, count, catalog = products.len(), "offers derived");
                FetchOutcome::Loaded { count }
            }
            Err(e) => self.state.fail(VIEW, &e, config::OFFERS_FAILURE_MESSAGE),
        }
    }

    pub fn detach(&mut self) {
        self.state.detach();
    }

    pub fn is_detached(&self) -> bool {
        self.state.is_detached()
    }

    /// All derived offers in catalog order.
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// Offers flagged for prominent display, in order.
    pub fn featured(&self) -> impl Iterator<Item = &Offer> {
        self.offers.iter().filter(|o| o.is_featured)
    }

    /// Offers not flagged as featured, in order.
    pub fn regular(&self) -> impl Iterator<Item = &Offer> {
        self.offers.iter().filter(|o| !o.is_featured)
    }

    /// Largest discount on the page, for the "up to X% off" banner.
    pub fn headline_discount(&self) -> u32 {
        max_discount(&self.offers)
    }

    /// Hand the offer for product `id` to `cart` at its discounted price.
    pub fn add_to_cart(&self, id: u64, cart: &mut dyn CartStore) -> Result<CartItem> {
        let offer = self
            .offers
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| StorefrontError::NotFound(format!("No offer for product {}", id)))?;
        let item = CartItem::from(offer);
        cart.add_item(item.clone());
        Ok(item)
    }
}
