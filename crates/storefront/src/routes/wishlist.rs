//! Wishlist route handlers.

use axum::{Json, extract::State};
use brunelli_core::ProductId;
use brunelli_core::wishlist::{Wishlist, WishlistItem};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::models::session::{load, store};
use crate::models::session_keys;
use crate::state::AppState;

/// Wishlist request body.
#[derive(Debug, Deserialize)]
pub struct WishlistRequest {
    pub product_id: String,
}

/// Wishlist response. `saved` is set by toggle.
#[derive(Debug, Serialize)]
pub struct WishlistView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved: Option<bool>,
    pub count: usize,
    pub items: Vec<WishlistItem>,
}

impl WishlistView {
    fn new(wishlist: Wishlist, saved: Option<bool>) -> Self {
        Self {
            saved,
            count: wishlist.len(),
            items: wishlist.items().to_vec(),
        }
    }
}

/// Saved items, oldest first.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<WishlistView>> {
    let wishlist: Wishlist = load(&session, session_keys::WISHLIST).await?;
    Ok(Json(WishlistView::new(wishlist, None)))
}

/// Heart button: save the product if absent, forget it otherwise.
#[instrument(skip(state, session))]
pub async fn toggle(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<WishlistRequest>,
) -> Result<Json<WishlistView>> {
    let id = ProductId::new(request.product_id);
    let item = {
        let catalog = state.catalog().read().await;
        WishlistItem::from(catalog.catalog().product(&id)?)
    };

    let mut wishlist: Wishlist = load(&session, session_keys::WISHLIST).await?;
    let saved = wishlist.toggle(item);
    store(&session, session_keys::WISHLIST, &wishlist).await?;

    tracing::debug!(product_id = %id, saved, "Toggled wishlist");
    Ok(Json(WishlistView::new(wishlist, Some(saved))))
}

/// Forget a product. Ids that are not saved are ignored.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Json(request): Json<WishlistRequest>,
) -> Result<Json<WishlistView>> {
    let mut wishlist: Wishlist = load(&session, session_keys::WISHLIST).await?;
    wishlist.remove(&ProductId::new(request.product_id));
    store(&session, session_keys::WISHLIST, &wishlist).await?;
    Ok(Json(WishlistView::new(wishlist, None)))
}
