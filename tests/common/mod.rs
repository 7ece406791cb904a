//! Shared test fixtures for the storefront SDK integration tests.
//!
//! Provides a small sample catalog shaped like the public product API, a
//! scripted [`CatalogSource`], and a one-shot local HTTP server.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use storefront_sdk::{CatalogSource, Product, Rating, Result, StorefrontError};

/// Build a product with the fields the listing logic cares about.
pub fn product(id: u64, title: &str, price: f64, category: &str, rate: f64) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        description: format!("{} for everyday use", title.to_lowercase()),
        category: category.to_string(),
        image: format!("https://fakestoreapi.com/img/{}.jpg", id),
        rating: Rating { rate, count: 100 + id as u32 },
    }
}

/// Eight products over four categories, with repeated prices and ratings so
/// sort stability is observable.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        product(1, "Fjallraven Foldsack Backpack", 109.95, "men's clothing", 3.9),
        product(2, "Mens Casual Premium Slim Fit T-Shirts", 22.3, "men's clothing", 4.1),
        product(3, "Mens Cotton Jacket", 55.99, "men's clothing", 4.7),
        product(4, "John Hardy Chain Bracelet", 695.0, "jewelery", 4.6),
        product(5, "Solid Gold Petite Micropave", 22.3, "jewelery", 3.9),
        product(6, "WD 2TB Elements Portable Hard Drive", 64.0, "electronics", 3.3),
        product(7, "Rain Jacket Women Windbreaker", 39.99, "women's clothing", 3.9),
        product(8, "acer SB220Q 21.5 inch Monitor", 599.0, "electronics", 2.9),
    ]
}

pub fn ids(products: &[Product]) -> Vec<u64> {
    products.iter().map(|p| p.id).collect()
}

// ---------------------------------------------------------------------------
// ScriptedSource
// ---------------------------------------------------------------------------

pub enum Scripted {
    Products(Vec<Product>),
    Fail,
    Panic,
}

/// A catalog source that replays scripted responses in order and then keeps
/// failing.
pub struct ScriptedSource {
    script: Mutex<VecDeque<Scripted>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(script: Vec<Scripted>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn ok(products: Vec<Product>) -> Self {
        Self::new(vec![Scripted::Products(products)])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CatalogSource for ScriptedSource {
    fn fetch_products(&self) -> Result<Vec<Product>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Products(products)) => Ok(products),
            Some(Scripted::Panic) => panic!("scripted source panicked"),
            Some(Scripted::Fail) | None => Err(StorefrontError::Status {
                status: 503,
                url: "scripted://products".to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// SlowSource
// ---------------------------------------------------------------------------

/// A catalog source that always succeeds, but only after `delay`.
pub struct SlowSource {
    products: Vec<Product>,
    delay: Duration,
    calls: AtomicUsize,
}

impl SlowSource {
    pub fn new(products: Vec<Product>, delay: Duration) -> Self {
        Self {
            products,
            delay,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CatalogSource for SlowSource {
    fn fetch_products(&self) -> Result<Vec<Product>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        thread::sleep(self.delay);
        Ok(self.products.clone())
    }
}

// ---------------------------------------------------------------------------
// One-shot HTTP server
// ---------------------------------------------------------------------------

/// Serve a single HTTP response on a random local port.
///
/// Returns the base URL to hand to the SDK and the server thread handle.
pub fn serve_once(status_line: &str, body: &str) -> (String, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );

    let handle = thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 8192];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    (format!("http://{}", addr), handle)
}
