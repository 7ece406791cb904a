//! HTTP catalog source tests against a one-shot local server.

mod common;

use std::time::Duration;

use common::{ids, sample_catalog, serve_once};
use storefront_sdk::{CatalogSource, FetchOutcome, HttpCatalogSource, StorefrontError, StorefrontSdk};

fn source_for(base_url: &str) -> HttpCatalogSource {
    HttpCatalogSource::new(base_url, Duration::from_secs(5)).unwrap()
}

#[test]
fn fetches_and_decodes_catalog() {
    let body = serde_json::to_string(&sample_catalog()).unwrap();
    let (base, server) = serve_once("200 OK", &body);

    let products = source_for(&base).fetch_products().unwrap();
    server.join().unwrap();

    assert_eq!(ids(&products), ids(&sample_catalog()));
    assert_eq!(products[3].category, "jewelery");
}

#[test]
fn non_success_status_is_fetch_failure() {
    let (base, server) = serve_once("500 Internal Server Error", "{}");

    let err = source_for(&base).fetch_products().unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, StorefrontError::Status { status: 500, .. }));
    assert!(err.is_fetch_failure());
}

#[test]
fn malformed_body_is_fetch_failure() {
    let (base, server) = serve_once("200 OK", r#"{"not": "an array"}"#);

    let err = source_for(&base).fetch_products().unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, StorefrontError::Json(_)));
    assert!(err.is_fetch_failure());
}

#[test]
fn unreachable_host_is_fetch_failure() {
    // Bind then drop to get a port with nothing listening.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let err = source_for(&format!("http://127.0.0.1:{}", port))
        .fetch_products()
        .unwrap_err();
    assert!(matches!(err, StorefrontError::Http(_)));
    assert!(err.is_fetch_failure());
}

#[test]
fn products_url_appends_path() {
    let source = source_for("http://localhost:9999/");
    assert_eq!(source.products_url(), "http://localhost:9999/products");
}

#[test]
fn sdk_refresh_loads_view_from_configured_base_url() {
    let body = serde_json::to_string(&sample_catalog()).unwrap();
    let (base, server) = serve_once("200 OK", &body);

    let sdk = StorefrontSdk::builder()
        .base_url(base.clone())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    assert_eq!(sdk.to_string(), format!("StorefrontSdk(endpoint={}/products)", base));

    let mut view = sdk.catalog();
    assert_eq!(sdk.refresh(&mut view), FetchOutcome::Loaded { count: 8 });
    server.join().unwrap();
}

#[test]
fn sdk_refresh_failure_sets_status() {
    let (base, server) = serve_once("404 Not Found", "[]");

    let sdk = StorefrontSdk::builder().base_url(base).build().unwrap();
    let mut view = sdk.catalog();
    assert_eq!(sdk.refresh(&mut view), FetchOutcome::Failed);
    server.join().unwrap();

    assert!(view.status().error_message().is_some());
    assert!(view.products().is_empty());
}
