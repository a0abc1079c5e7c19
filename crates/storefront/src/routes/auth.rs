//! Customer sign-in route handlers.
//!
//! Accounts are mock identities: see `brunelli_core::account`.

use axum::{Json, http::StatusCode};
use brunelli_core::account::{Customer, Registration};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::services::auth::AuthService;

/// Login request body.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signed-in customer response.
#[derive(Debug, Serialize)]
pub struct CustomerView {
    pub name: String,
    #[serde(flatten)]
    pub customer: Customer,
}

impl From<Customer> for CustomerView {
    fn from(customer: Customer) -> Self {
        Self {
            name: customer.full_name(),
            customer,
        }
    }
}

/// Handle login.
#[instrument(skip(session, request))]
pub async fn login(session: Session, Json(request): Json<LoginRequest>) -> Result<Json<CustomerView>> {
    let customer = AuthService::new(&session)
        .login(&request.email, &request.password)
        .await?;
    Ok(Json(customer.into()))
}

/// Handle registration. The new customer is signed in straight away.
#[instrument(skip(session, form))]
pub async fn register(
    session: Session,
    Json(form): Json<Registration>,
) -> Result<(StatusCode, Json<CustomerView>)> {
    let customer = AuthService::new(&session).register(&form).await?;
    Ok((StatusCode::CREATED, Json(customer.into())))
}

/// Handle logout.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<StatusCode> {
    AuthService::new(&session).logout().await?;
    Ok(StatusCode::NO_CONTENT)
}
