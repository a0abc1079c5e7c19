//! Catalog browsing: listing filters, shop paths, product detail.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::http::StatusCode;
use brunelli_integration_tests::{TestClient, amount, product_ids};
use rust_decimal::Decimal;

#[tokio::test]
async fn test_health() {
    let client = TestClient::new().await;
    let response = client.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "ok");
    assert!(response.headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_default_listing_is_catalog_order() {
    let client = TestClient::new().await;
    let response = client.get("/products").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(product_ids(&response.body), ["1", "2", "3", "4", "5", "6"]);
    assert_eq!(response.body["count"], 6);
    assert_eq!(response.body["filters"]["sort"], "featured");
    assert!(
        response.body["facets"]["colors"]
            .as_array()
            .unwrap()
            .contains(&"Burgundy".into())
    );
}

#[tokio::test]
async fn test_price_low_sort() {
    let client = TestClient::new().await;
    let response = client.get("/products?sort=price-low").await;
    let prices: Vec<Decimal> = response.body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| amount(&p["price"]))
        .collect();
    let expected: Vec<Decimal> = [28, 35, 39, 45, 129, 149]
        .into_iter()
        .map(Decimal::from)
        .collect();
    assert_eq!(prices, expected);
}

#[tokio::test]
async fn test_color_and_price_filters() {
    let client = TestClient::new().await;
    let response = client.get("/products?colors=Black,Nude&max_price=40").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(product_ids(&response.body), ["3"]);

    let response = client.get("/products?sizes=One%20Size").await;
    assert_eq!(product_ids(&response.body), ["4"]);
}

#[tokio::test]
async fn test_unknown_sort_is_bad_request() {
    let client = TestClient::new().await;
    let response = client.get("/products?sort=cheapest").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "unknown sort key: cheapest");
}

#[tokio::test]
async fn test_shop_paths() {
    let client = TestClient::new().await;

    let response = client.get("/shop/clothing").await;
    assert_eq!(product_ids(&response.body), ["1"]);
    assert_eq!(response.body["filters"]["category"], "CLOTHING");
    assert!(!response.body["subcategories"].as_array().unwrap().is_empty());

    let response = client.get("/shop/post-partum").await;
    assert_eq!(product_ids(&response.body), ["3"]);

    let response = client.get("/shop/breastfeeding/bras").await;
    assert_eq!(product_ids(&response.body), ["2"]);

    // The query string wins over the path.
    let response = client.get("/shop/clothing?category=All").await;
    assert_eq!(response.body["count"], 6);
}

#[tokio::test]
async fn test_product_detail() {
    let client = TestClient::new().await;
    let response = client.get("/products/1").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["product"]["name"], "Elegant Maternity Wrap Dress");
    assert_eq!(response.body["discount_percent"], 19);
    assert_eq!(response.body["stock_status"], "in_stock");
    assert_eq!(response.body["in_wishlist"], false);
    // Alone in its category.
    assert_eq!(response.body["related"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_unknown_product_is_not_found() {
    let client = TestClient::new().await;
    let response = client.get("/products/999").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "product not found: 999");
}

#[tokio::test]
async fn test_category_tree() {
    let client = TestClient::new().await;
    let response = client.get("/categories").await;
    let tree = response.body.as_array().unwrap();
    assert_eq!(tree.len(), 9);
    assert_eq!(tree[0]["name"], "CLOTHING");
}

#[tokio::test]
async fn test_request_ids_are_unique() {
    let client = TestClient::new().await;
    let first = client.get("/products").await;
    let second = client.get("/products").await;
    assert_ne!(
        first.headers["x-request-id"],
        second.headers["x-request-id"]
    );
}
