//! Cart route handlers.
//!
//! The cart is a `CartState` stored in the session. Every mutating handler
//! loads it, dispatches one `CartAction` and writes it back, then answers
//! with the full cart so the client never recomputes totals.

use axum::{Json, extract::State};
use brunelli_core::cart::{CartAction, CartLineItem, CartState, line_item_for};
use brunelli_core::pricing::OrderSummary;
use brunelli_core::{LineItemId, Price, ProductId, Quantity};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_sessions::Session;
use tracing::{info, instrument};

use crate::error::{Result, add_breadcrumb};
use crate::models::session::{load, store};
use crate::models::session_keys;
use crate::state::AppState;

/// One cart row with its line total.
#[derive(Debug, Serialize)]
pub struct CartLineView {
    #[serde(flatten)]
    pub item: CartLineItem,
    pub line_total: Price,
}

/// Cart response.
#[derive(Debug, Serialize)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub item_count: u64,
    pub summary: OrderSummary,
}

impl From<&CartState> for CartView {
    fn from(cart: &CartState) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .map(|item| CartLineView {
                    line_total: item.line_total(),
                    item: item.clone(),
                })
                .collect(),
            item_count: cart.item_count(),
            summary: cart.summary(),
        }
    }
}

/// Add to cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: String,
    pub size: Option<String>,
    pub color: Option<String>,
    pub quantity: Option<i64>,
}

/// Update quantity request body.
#[derive(Debug, Deserialize)]
pub struct UpdateCartRequest {
    pub id: String,
    pub quantity: i64,
}

/// Remove line request body.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartRequest {
    pub id: String,
}

async fn apply(session: &Session, action: CartAction) -> Result<CartView> {
    let mut cart: CartState = load(session, session_keys::CART).await?;
    cart.dispatch(action);
    store(session, session_keys::CART, &cart).await?;
    Ok(CartView::from(&cart))
}

/// Current cart with order summary.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<CartView>> {
    let cart: CartState = load(&session, session_keys::CART).await?;
    Ok(Json(CartView::from(&cart)))
}

/// Item count for the header badge.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<Json<Value>> {
    let cart: CartState = load(&session, session_keys::CART).await?;
    Ok(Json(json!({ "count": cart.item_count() })))
}

/// Add a product selection to the cart.
///
/// No size selected answers `400` with "please select a size" and leaves
/// the cart untouched.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<CartView>> {
    let product_id = ProductId::new(request.product_id);
    let line = {
        let catalog = state.catalog().read().await;
        let product = catalog.catalog().product(&product_id)?;
        line_item_for(
            product,
            request.size.as_deref(),
            request.color.as_deref(),
            request.quantity.map_or(Quantity::ONE, Quantity::new),
        )?
    };

    info!(line_id = %line.id, quantity = line.quantity.get(), "Adding to cart");
    add_breadcrumb("cart", "Added to cart", &[("line_id", line.id.as_str())]);

    apply(&session, CartAction::AddItem(line)).await.map(Json)
}

/// Set a line's quantity. Values below 1 become 1.
#[instrument(skip(session))]
pub async fn update(
    session: Session,
    Json(request): Json<UpdateCartRequest>,
) -> Result<Json<CartView>> {
    let action = CartAction::UpdateQuantity {
        id: LineItemId::new(request.id),
        quantity: request.quantity,
    };
    apply(&session, action).await.map(Json)
}

/// Remove a line.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Json(request): Json<RemoveFromCartRequest>,
) -> Result<Json<CartView>> {
    apply(&session, CartAction::RemoveItem(LineItemId::new(request.id)))
        .await
        .map(Json)
}

/// Empty the cart.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Json<CartView>> {
    apply(&session, CartAction::ClearCart).await.map(Json)
}
