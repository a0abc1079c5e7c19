//! Integration tests for the Brunelli storefront.
//!
//! Each [`TestClient`] serves the real router on an ephemeral local port and
//! talks to it with a `reqwest` client whose cookie store plays the browser:
//! the session cookie is kept between requests, so a cart built by one
//! request is seen by the next.
//!
//! ```rust,ignore
//! let client = TestClient::new().await;
//! let response = client.get("/products?sort=price-low").await;
//! assert_eq!(response.status, StatusCode::OK);
//! ```

use std::str::FromStr;
use std::time::Duration;

use axum::http::{HeaderMap, Method, StatusCode};
use brunelli_core::catalog::Catalog;
use brunelli_storefront::config::StorefrontConfig;
use brunelli_storefront::state::AppState;
use rust_decimal::Decimal;
use secrecy::SecretString;
use serde_json::Value;
use tokio::net::TcpListener;

/// Admin password used by [`TestClient::with_admin`].
pub const TEST_ADMIN_PASSWORD: &str = "Vq8#mZ2!rT5&kLp9";

/// A decoded response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// JSON body; `Null` when empty, a string when not JSON.
    pub body: Value,
}

/// A browser session against a storefront running on a local port.
///
/// Clones share the cookie store, like two tabs of one browser.
#[derive(Clone)]
pub struct TestClient {
    base_url: String,
    http: reqwest::Client,
}

impl TestClient {
    /// Demo catalog, no admin, instant checkout.
    pub async fn new() -> Self {
        Self::with_config(StorefrontConfig {
            checkout_delay: Duration::ZERO,
            ..StorefrontConfig::default()
        })
        .await
    }

    /// Like [`TestClient::new`] with the admin panel enabled.
    pub async fn with_admin() -> Self {
        Self::with_config(StorefrontConfig {
            checkout_delay: Duration::ZERO,
            admin_password: Some(SecretString::from(TEST_ADMIN_PASSWORD)),
            ..StorefrontConfig::default()
        })
        .await
    }

    /// Start a storefront over the demo catalog with a custom configuration.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn with_config(config: StorefrontConfig) -> Self {
        let app = brunelli_storefront::app(AppState::new(config, Catalog::demo()));
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("listener address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("test server");
        });

        Self {
            base_url: format!("http://{addr}"),
            http: browser(),
        }
    }

    /// A second browser against the same server (own cookie jar).
    #[must_use]
    pub fn fresh_session(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            http: browser(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::PATCH, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None).await
    }

    /// Send one request through this browser's cookie store.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot be reached or the body cannot be read.
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let mut request = self.http.request(method, format!("{}{uri}", self.base_url));
        if let Some(json) = body {
            request = request.json(&json);
        }
        let response = request.send().await.expect("storefront reachable");

        let status = response.status();
        let headers = response.headers().clone();
        let text = response.text().await.expect("readable body");
        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or_else(|_| Value::String(text))
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

fn browser() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("http client")
}

/// Read a serialized `Price` (or bare decimal string) as a `Decimal`.
///
/// # Panics
///
/// Panics if the value is not a price.
#[must_use]
pub fn amount(value: &Value) -> Decimal {
    let raw = value
        .get("amount")
        .unwrap_or(value)
        .as_str()
        .expect("price amount is a string");
    Decimal::from_str(raw).expect("price amount is a decimal")
}

/// Product ids of a listing, in order.
#[must_use]
pub fn product_ids(listing: &Value) -> Vec<String> {
    listing["products"]
        .as_array()
        .map(|products| {
            products
                .iter()
                .filter_map(|p| p["id"].as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default()
}

/// A checkout form that passes validation.
#[must_use]
pub fn valid_checkout_form() -> Value {
    serde_json::json!({
        "email": "giulia@example.it",
        "phone": "+39 02 1234567",
        "first_name": "Giulia",
        "last_name": "Rossi",
        "address": "Via Roma 1",
        "city": "Milano",
        "postal_code": "20121",
        "country": "Italy",
        "payment_method": "card",
        "card_number": "4242 4242 4242 4242",
        "expiry_date": "12/28",
        "cvv": "123",
        "card_name": "Giulia Rossi"
    })
}
