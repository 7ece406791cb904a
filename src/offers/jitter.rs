//! Random sources for the discount jitter added to each offer.

use rand::rngs::StdRng;
use rand::prelude::*;

use crate::config;
use crate::models::Product;

/// Supplies the per-offer jitter added to the cyclic discount step.
///
/// Implementations must return a value in `0..=MAX_JITTER`; larger values
/// are clamped by the deriver.
pub trait DiscountJitter {
    fn jitter(&mut self, index: usize, product: &Product) -> u32;
}

/// Unseeded thread-local randomness. Offers differ from call to call.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomJitter;

impl DiscountJitter for RandomJitter {
    fn jitter(&mut self, _index: usize, _product: &Product) -> u32 {
        thread_rng().gen_range(0..=config::MAX_JITTER)
    }
}

/// Seeded generator: the same seed and catalog give the same offers.
#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: StdRng,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DiscountJitter for SeededJitter {
    fn jitter(&mut self, _index: usize, _product: &Product) -> u32 {
        self.rng.gen_range(0..=config::MAX_JITTER)
    }
}

/// Replays a fixed sequence, wrapping around when exhausted. An empty
/// sequence always yields zero.
#[derive(Debug, Clone, Default)]
pub struct FixedJitter {
    values: Vec<u32>,
    cursor: usize,
}

impl FixedJitter {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl DiscountJitter for FixedJitter {
    fn jitter(&mut self, _index: usize, _product: &Product) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}

impl<J: DiscountJitter + ?Sized> DiscountJitter for &mut J {
    fn jitter(&mut self, index: usize, product: &Product) -> u32 {
        (**self).jitter(index, product)
    }
}
