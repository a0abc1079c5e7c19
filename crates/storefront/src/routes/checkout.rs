//! Checkout route handlers.

use axum::{Json, extract::State, http::StatusCode};
use brunelli_core::cart::CartState;
use brunelli_core::checkout::{CheckoutError, CheckoutForm, PlacedOrder};
use serde::Serialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::OptionalCustomer;
use crate::models::session::load;
use crate::models::session_keys;
use crate::routes::cart::CartView;
use crate::services::checkout::CheckoutService;
use crate::state::AppState;

/// Checkout page data: the form to fill in and what is being bought.
#[derive(Debug, Serialize)]
pub struct CheckoutView {
    pub form: CheckoutForm,
    pub cart: CartView,
}

/// Prefilled checkout form for the current cart.
#[instrument(skip(session, customer))]
pub async fn show(
    session: Session,
    OptionalCustomer(customer): OptionalCustomer,
) -> Result<Json<CheckoutView>> {
    let cart: CartState = load(&session, session_keys::CART).await?;
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart.into());
    }
    Ok(Json(CheckoutView {
        form: CheckoutForm::prefilled(customer.as_ref()),
        cart: CartView::from(&cart),
    }))
}

/// Place the order. Answers `201` once the simulated payment completes.
#[instrument(skip(state, session, form))]
pub async fn place(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<CheckoutForm>,
) -> Result<(StatusCode, Json<PlacedOrder>)> {
    let order = CheckoutService::new(&session, state.config().checkout_delay)
        .place(&form)
        .await?;
    Ok((StatusCode::CREATED, Json(order)))
}
