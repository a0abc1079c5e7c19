//! Admin panel route handlers.
//!
//! Gated by `ADMIN_PASSWORD`: `/admin/login` marks the session as admin and
//! every other handler here requires that mark. Edits go to the shared
//! in-memory catalog and are visible to shoppers immediately.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use brunelli_core::ProductId;
use brunelli_core::catalog::{CategoryTree, Product, ProductDraft, ProductPatch};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Admin login request body.
#[derive(Deserialize)]
pub struct AdminLoginRequest {
    pub password: String,
}

/// New category or subcategory request body.
#[derive(Debug, Deserialize)]
pub struct NameRequest {
    pub name: String,
}

/// Handle admin login.
#[instrument(skip(state, session, request))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<AdminLoginRequest>,
) -> Result<StatusCode> {
    AuthService::new(&session)
        .admin_login(state.config().admin_password.as_ref(), &request.password)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handle admin logout.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<StatusCode> {
    AuthService::new(&session).admin_logout().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create a product.
#[instrument(skip(state, draft))]
pub async fn create_product(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(draft): Json<ProductDraft>,
) -> Result<(StatusCode, Json<Product>)> {
    let mut store = state.catalog().write().await;
    let id = store.add_product(draft)?;
    let product = store.catalog().product(&id)?.clone();
    Ok((StatusCode::CREATED, Json(product)))
}

/// Apply a partial update to a product.
#[instrument(skip(state, patch))]
pub async fn update_product(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>> {
    let mut store = state.catalog().write().await;
    let product = store.update_product(&ProductId::new(id), patch)?;
    Ok(Json(product.clone()))
}

/// Delete a product.
#[instrument(skip(state))]
pub async fn delete_product(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state
        .catalog()
        .write()
        .await
        .delete_product(&ProductId::new(id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add a top-level category.
#[instrument(skip(state))]
pub async fn add_category(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(request): Json<NameRequest>,
) -> Result<(StatusCode, Json<CategoryTree>)> {
    let mut store = state.catalog().write().await;
    store.add_category(&request.name)?;
    Ok((StatusCode::CREATED, Json(store.catalog().categories.clone())))
}

/// Delete a category and its subcategories.
#[instrument(skip(state))]
pub async fn delete_category(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CategoryTree>> {
    let mut store = state.catalog().write().await;
    store.delete_category(&name)?;
    Ok(Json(store.catalog().categories.clone()))
}

/// Add a subcategory under a category.
#[instrument(skip(state))]
pub async fn add_subcategory(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(category): Path<String>,
    Json(request): Json<NameRequest>,
) -> Result<(StatusCode, Json<CategoryTree>)> {
    let mut store = state.catalog().write().await;
    store.add_subcategory(&category, &request.name)?;
    Ok((StatusCode::CREATED, Json(store.catalog().categories.clone())))
}

/// Delete a subcategory.
#[instrument(skip(state))]
pub async fn delete_subcategory(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path((category, subcategory)): Path<(String, String)>,
) -> Result<Json<CategoryTree>> {
    let mut store = state.catalog().write().await;
    store.delete_subcategory(&category, &subcategory)?;
    Ok(Json(store.catalog().categories.clone()))
}
