//! Offer derivation tests.

mod common;

use common::{product, sample_catalog};
use storefront_sdk::models::CartItem;
use storefront_sdk::offers::{derive_offers, max_discount, partition_featured, FixedJitter, OfferDeriver};
use storefront_sdk::Product;

fn catalog(n: usize) -> Vec<Product> {
    (0..n)
        .map(|i| product(i as u64 + 1, &format!("Item {}", i), 20.0 + i as f64, "electronics", 4.0))
        .collect()
}

#[test]
fn offers_are_capped_at_twelve() {
    for len in [0usize, 1, 5, 12, 20] {
        assert_eq!(derive_offers(&catalog(len)).len(), len.min(12), "len {}", len);
    }
}

#[test]
fn random_discounts_stay_in_range_and_price_follows() {
    let products = catalog(20);
    let offers = derive_offers(&products);
    for (index, offer) in offers.iter().enumerate() {
        let base = [10, 15, 20, 25, 30, 35, 40, 45, 50][index % 9];
        assert!((base..=base + 9).contains(&offer.discount_percent));
        assert!((10..=59).contains(&offer.discount_percent));

        let expected = offer.original_price * (1.0 - f64::from(offer.discount_percent) / 100.0);
        assert!((offer.final_price - expected).abs() < 1e-9);
        assert!(offer.final_price <= offer.original_price);
        assert_eq!(offer.id, products[index].id);
        assert_eq!(offer.product, products[index]);
    }
}

#[test]
fn positional_flags() {
    let offers = derive_offers(&catalog(12));
    for (index, offer) in offers.iter().enumerate() {
        assert_eq!(offer.is_featured, index < 3, "featured at {}", index);
        assert_eq!(offer.is_limited_time, index % 3 == 0, "limited at {}", index);
    }
}

#[test]
fn single_product_is_featured_and_limited() {
    let offers = derive_offers(&catalog(1));
    assert_eq!(offers.len(), 1);
    assert!(offers[0].is_featured);
    assert!(offers[0].is_limited_time);
    assert!((10..=19).contains(&offers[0].discount_percent));
}

#[test]
fn fixed_jitter_gives_exact_values() {
    let products = sample_catalog();
    let mut deriver = OfferDeriver::new(FixedJitter::new(vec![3]));
    let offers = deriver.derive(&products);

    assert_eq!(offers[0].discount_percent, 13);
    assert!((offers[0].final_price - 109.95 * 0.87).abs() < 1e-9);
    assert_eq!(offers[0].display_original_price(), "$109.95");

    assert_eq!(offers[7].discount_percent, 48);
    assert_eq!(max_discount(&offers), 48);
}

#[test]
fn partition_keeps_relative_order() {
    let offers = derive_offers(&catalog(7));
    let (featured, regular) = partition_featured(&offers);
    let f: Vec<u64> = featured.iter().map(|o| o.id).collect();
    let r: Vec<u64> = regular.iter().map(|o| o.id).collect();
    assert_eq!(f, vec![1, 2, 3]);
    assert_eq!(r, vec![4, 5, 6, 7]);
}

#[test]
fn cart_item_from_offer_uses_final_price() {
    let mut deriver = OfferDeriver::new(FixedJitter::new(vec![0]));
    let offers = deriver.derive(&[product(9, "Thing", 50.0, "x", 1.0)]);
    let item = CartItem::from(&offers[0]);
    assert_eq!(item.id, 9);
    assert_eq!(item.title, "Thing");
    assert!((item.price - 45.0).abs() < 1e-9);
    assert_eq!(offers[0].display_final_price(), "$45.00");
    assert_eq!(offers[0].display_savings(), "$5.00");
    assert_eq!(item.image, "https://fakestoreapi.com/img/9.jpg");
}
