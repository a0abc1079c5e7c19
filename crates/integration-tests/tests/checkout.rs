//! Checkout: prefill, validation, order placement and history.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::time::{Duration, Instant};

use axum::http::StatusCode;
use brunelli_integration_tests::{TestClient, amount, valid_checkout_form};
use brunelli_storefront::config::StorefrontConfig;
use rust_decimal::Decimal;
use serde_json::json;

async fn fill_cart(client: &TestClient) {
    client
        .post(
            "/cart/add",
            json!({ "product_id": "2", "size": "34B", "color": "Nude", "quantity": 2 }),
        )
        .await;
}

#[tokio::test]
async fn test_empty_cart_cannot_check_out() {
    let client = TestClient::new().await;

    let response = client.get("/checkout").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "your cart is empty");

    let response = client.post("/checkout", valid_checkout_form()).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_form_is_prefilled_for_signed_in_customer() {
    let client = TestClient::new().await;
    fill_cart(&client).await;

    let response = client.get("/checkout").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["form"]["email"], "");
    assert_eq!(response.body["form"]["country"], "Italy");

    client
        .post(
            "/auth/login",
            json!({ "email": "sarah@example.com", "password": "secret1" }),
        )
        .await;

    let response = client.get("/checkout").await;
    let form = &response.body["form"];
    assert_eq!(form["email"], "sarah@example.com");
    assert_eq!(form["first_name"], "Sarah");
    assert_eq!(form["last_name"], "Johnson");
    assert_eq!(form["country"], "Italy");
    // The cart survives the session id change at login.
    assert_eq!(response.body["cart"]["item_count"], 2);
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let client = TestClient::new().await;
    fill_cart(&client).await;

    let mut form = valid_checkout_form();
    form["city"] = json!("  ");
    let response = client.post("/checkout", form).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "city is required");

    let mut form = valid_checkout_form();
    form["email"] = json!("not-an-email");
    let response = client.post("/checkout", form).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    // Nothing was charged.
    assert_eq!(client.get("/cart/count").await.body["count"], 2);
}

#[tokio::test]
async fn test_place_order() {
    let client = TestClient::new().await;
    fill_cart(&client).await;

    let response = client.post("/checkout", valid_checkout_form()).await;
    assert_eq!(response.status, StatusCode::CREATED);

    let order = &response.body;
    let order_id = order["id"].as_str().unwrap().to_owned();
    assert!(order_id.starts_with("ORD-"));
    assert_eq!(order["status"], "processing");
    assert_eq!(order["shipping"]["city"], "Milano");
    assert_eq!(order["items"].as_array().unwrap().len(), 1);
    assert_eq!(amount(&order["summary"]["total"]), Decimal::new(9995, 2));
    // Card details are never echoed back.
    assert!(order.get("card_number").is_none());
    assert!(order["shipping"].get("card_number").is_none());

    assert_eq!(client.get("/cart/count").await.body["count"], 0);

    client
        .post(
            "/auth/login",
            json!({ "email": "giulia@example.it", "password": "secret1" }),
        )
        .await;
    let response = client.get("/account/orders").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body[0]["id"], order_id);
}

#[tokio::test]
async fn test_orders_are_listed_newest_first() {
    let client = TestClient::new().await;
    let mut placed = Vec::new();
    for _ in 0..2 {
        fill_cart(&client).await;
        let response = client.post("/checkout", valid_checkout_form()).await;
        placed.push(response.body["id"].as_str().unwrap().to_owned());
    }

    client
        .post(
            "/auth/login",
            json!({ "email": "giulia@example.it", "password": "secret1" }),
        )
        .await;
    let response = client.get("/account/orders").await;
    let ids: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, [placed[1].as_str(), placed[0].as_str()]);
}

#[tokio::test]
async fn test_payment_delay_is_applied() {
    let delay = Duration::from_millis(50);
    let client = TestClient::with_config(StorefrontConfig {
        checkout_delay: delay,
        ..StorefrontConfig::default()
    })
    .await;
    fill_cart(&client).await;

    let started = Instant::now();
    let response = client.post("/checkout", valid_checkout_form()).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert!(started.elapsed() >= delay);
}

#[tokio::test]
async fn test_checkout_clears_adds_made_during_payment() {
    let client = TestClient::with_config(StorefrontConfig {
        checkout_delay: Duration::from_millis(300),
        ..StorefrontConfig::default()
    })
    .await;
    fill_cart(&client).await;

    let tab = client.clone();
    let checkout = tokio::spawn(async move { tab.post("/checkout", valid_checkout_form()).await });
    tokio::time::sleep(Duration::from_millis(100)).await;

    let response = client
        .post("/cart/add", json!({ "product_id": "6", "size": "100ml" }))
        .await;
    assert_eq!(response.body["item_count"], 3);

    let placed = checkout.await.unwrap();
    assert_eq!(placed.status, StatusCode::CREATED);
    // Only the lines present when checkout began were ordered.
    assert_eq!(placed.body["items"].as_array().unwrap().len(), 1);
    // The whole cart is cleared, including the late add.
    assert_eq!(client.get("/cart/count").await.body["count"], 0);
}
