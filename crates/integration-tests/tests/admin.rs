//! Admin panel: password gate, product and category management.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::http::StatusCode;
use brunelli_integration_tests::{TEST_ADMIN_PASSWORD, TestClient, amount, product_ids};
use rust_decimal::Decimal;
use serde_json::{Value, json};

fn draft() -> Value {
    json!({
        "name": "Maternity Jumpsuit",
        "price": { "amount": "79.00", "currency_code": "EUR" },
        "category": "CLOTHING",
        "subcategory": "Jumpsuits",
        "colors": ["Olive", " "],
        "sizes": ["S", "M", "L"],
        "description": "Relaxed fit with adjustable straps.",
        "is_new": true
    })
}

async fn signed_in_admin() -> TestClient {
    let client = TestClient::with_admin().await;
    let response = client
        .post("/admin/login", json!({ "password": TEST_ADMIN_PASSWORD }))
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    client
}

#[tokio::test]
async fn test_admin_disabled_without_password() {
    let client = TestClient::new().await;
    let response = client
        .post("/admin/login", json!({ "password": TEST_ADMIN_PASSWORD }))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_password() {
    let client = TestClient::with_admin().await;
    let response = client
        .post("/admin/login", json!({ "password": "admin123" }))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = client.post("/admin/products", draft()).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "admin login required");
}

#[tokio::test]
async fn test_product_lifecycle() {
    let admin = signed_in_admin().await;
    let shopper = admin.fresh_session();

    let response = admin.post("/admin/products", draft()).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["id"], "7");
    assert_eq!(response.body["colors"], json!(["Olive"]));

    let response = shopper.get("/products?category=CLOTHING").await;
    assert_eq!(product_ids(&response.body), ["1", "7"]);

    let response = admin
        .patch(
            "/admin/products/7",
            json!({ "price": { "amount": "69.00" }, "in_stock": false }),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(amount(&response.body["price"]), Decimal::from(69));
    assert_eq!(response.body["name"], "Maternity Jumpsuit");

    let response = shopper.get("/products/7").await;
    assert_eq!(response.body["stock_status"], "out_of_stock");

    let response = admin.delete("/admin/products/7").await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(shopper.get("/products/7").await.status, StatusCode::NOT_FOUND);

    let response = admin.delete("/admin/products/7").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_product_is_rejected() {
    let admin = signed_in_admin().await;

    let mut bad = draft();
    bad["sizes"] = json!([]);
    let response = admin.post("/admin/products", bad).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["error"],
        "invalid product: at least one size is required"
    );

    let response = admin
        .patch("/admin/products/1", json!({ "name": "" }))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let response = admin.get("/products/1").await;
    assert_eq!(response.body["product"]["name"], "Elegant Maternity Wrap Dress");
}

#[tokio::test]
async fn test_foreign_currency_is_rejected() {
    let admin = signed_in_admin().await;

    let mut usd = draft();
    usd["price"] = json!({ "amount": "10", "currency_code": "USD" });
    let response = admin.post("/admin/products", usd).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["error"],
        "product 7 is priced in USD, the store trades in EUR"
    );

    let response = admin
        .patch(
            "/admin/products/2",
            json!({ "price": { "amount": "10", "currency_code": "USD" } }),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    // The cart still totals in one currency.
    let shopper = admin.fresh_session();
    shopper
        .post("/cart/add", json!({ "product_id": "2", "size": "34B" }))
        .await;
    let response = shopper.get("/cart").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["summary"]["subtotal"]["currency_code"], "EUR");
    assert_eq!(amount(&response.body["summary"]["subtotal"]), Decimal::from(45));
}

#[tokio::test]
async fn test_category_management() {
    let admin = signed_in_admin().await;

    let response = admin
        .post("/admin/categories", json!({ "name": "SALE" }))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body.as_array().unwrap().len(), 10);

    let response = admin
        .post("/admin/categories", json!({ "name": "SALE" }))
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    let response = admin
        .post(
            "/admin/categories/SALE/subcategories",
            json!({ "name": "Last Sizes" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body[9]["subcategories"], json!(["Last Sizes"]));

    let response = admin
        .post(
            "/admin/categories/SALE/subcategories",
            json!({ "name": "last sizes" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    let response = admin
        .delete("/admin/categories/SALE/subcategories/Last%20Sizes")
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body[9]["subcategories"], json!([]));

    let response = admin.delete("/admin/categories/SALE").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 9);

    let response = admin.delete("/admin/categories/SALE").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_logout() {
    let admin = signed_in_admin().await;
    let response = admin.post("/admin/logout", json!({})).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = admin
        .post("/admin/categories", json!({ "name": "SALE" }))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
