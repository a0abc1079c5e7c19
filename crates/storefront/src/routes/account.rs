//! Account route handlers. Both require a signed-in customer.

use axum::Json;
use brunelli_core::checkout::PlacedOrder;
use brunelli_core::wishlist::{Wishlist, WishlistItem};
use serde::Serialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequireCustomer;
use crate::models::session::load;
use crate::models::session_keys;
use crate::routes::auth::CustomerView;

/// Account overview.
#[derive(Debug, Serialize)]
pub struct AccountView {
    pub profile: CustomerView,
    pub orders: Vec<PlacedOrder>,
    pub wishlist: Vec<WishlistItem>,
}

/// Profile, order history and wishlist.
#[instrument(skip(session, customer))]
pub async fn index(
    session: Session,
    RequireCustomer(customer): RequireCustomer,
) -> Result<Json<AccountView>> {
    let orders: Vec<PlacedOrder> = load(&session, session_keys::ORDERS).await?;
    let wishlist: Wishlist = load(&session, session_keys::WISHLIST).await?;

    Ok(Json(AccountView {
        profile: customer.into(),
        orders: newest_first(orders),
        wishlist: wishlist.items().to_vec(),
    }))
}

/// Orders placed in this session, newest first.
#[instrument(skip(session, _customer))]
pub async fn orders(
    session: Session,
    RequireCustomer(_customer): RequireCustomer,
) -> Result<Json<Vec<PlacedOrder>>> {
    let orders: Vec<PlacedOrder> = load(&session, session_keys::ORDERS).await?;
    Ok(Json(newest_first(orders)))
}

fn newest_first(mut orders: Vec<PlacedOrder>) -> Vec<PlacedOrder> {
    orders.reverse();
    orders
}
