//! Authentication extractors.
//!
//! Identity lives in the session: the signed-in [`Customer`] under
//! `current_customer` and the admin flag under `is_admin`. Handlers ask for
//! it by extractor; rejections are JSON `401`s.

use axum::{extract::FromRequestParts, http::request::Parts};
use brunelli_core::account::Customer;
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::session_keys;

fn session_of(parts: &Parts) -> Result<&Session, AppError> {
    parts
        .extensions
        .get::<Session>()
        .ok_or_else(|| AppError::Internal("session layer missing".to_string()))
}

/// Extractor that requires a signed-in customer.
///
/// ```rust,ignore
/// async fn account(RequireCustomer(customer): RequireCustomer) -> String {
///     customer.full_name()
/// }
/// ```
pub struct RequireCustomer(pub Customer);

impl<S> FromRequestParts<S> for RequireCustomer
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = session_of(parts)?;
        session
            .get::<Customer>(session_keys::CURRENT_CUSTOMER)
            .await?
            .map(Self)
            .ok_or_else(|| AppError::Unauthorized("please sign in".to_string()))
    }
}

/// Extractor that optionally gets the signed-in customer.
pub struct OptionalCustomer(pub Option<Customer>);

impl<S> FromRequestParts<S> for OptionalCustomer
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let customer = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<Customer>(session_keys::CURRENT_CUSTOMER)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(customer))
    }
}

/// Extractor that requires an admin session.
#[derive(Debug)]
pub struct RequireAdmin;

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = session_of(parts)?;
        let is_admin = session
            .get::<bool>(session_keys::IS_ADMIN)
            .await?
            .unwrap_or(false);
        if is_admin {
            Ok(Self)
        } else {
            Err(AppError::Unauthorized("admin login required".to_string()))
        }
    }
}

/// Store the signed-in customer in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_customer(
    session: &Session,
    customer: &Customer,
) -> Result<(), tower_sessions::session::Error> {
    session
        .insert(session_keys::CURRENT_CUSTOMER, customer)
        .await
}

/// Forget the signed-in customer (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_customer(
    session: &Session,
) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<Customer>(session_keys::CURRENT_CUSTOMER)
        .await?;
    Ok(())
}

/// Mark or unmark the session as admin.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_admin(session: &Session, is_admin: bool) -> Result<(), tower_sessions::session::Error> {
    if is_admin {
        session.insert(session_keys::IS_ADMIN, true).await
    } else {
        session.remove::<bool>(session_keys::IS_ADMIN).await?;
        Ok(())
    }
}
