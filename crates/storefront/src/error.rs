//! Unified error handling with Sentry integration.
//!
//! Every handler returns `Result<T, AppError>`. Domain errors from
//! `brunelli-core` convert with `?`; the response is always a JSON body of the
//! form `{"error": "<message>"}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use brunelli_core::account::AuthError;
use brunelli_core::cart::AddToCartError;
use brunelli_core::catalog::{CatalogError, ProductLookupError, UnknownSortKey};
use brunelli_core::checkout::CheckoutError;
use serde_json::json;
use thiserror::Error;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Add-to-cart selection was rejected.
    #[error(transparent)]
    Cart(#[from] AddToCartError),

    /// Product id did not resolve.
    #[error(transparent)]
    Product(#[from] ProductLookupError),

    /// Checkout form or cart was rejected.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// Admin catalog command failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Sign-in or registration failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Unknown sort label in a query string.
    #[error(transparent)]
    Sort(#[from] UnknownSortKey),

    /// Session store read or write failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller is not signed in, or not an admin.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Cart(_) | Self::Checkout(_) | Self::Sort(_) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Product(_) | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Catalog(err) => match err {
                CatalogError::ProductNotFound(_)
                | CatalogError::CategoryNotFound(_)
                | CatalogError::SubcategoryNotFound { .. } => StatusCode::NOT_FOUND,
                CatalogError::DuplicateProduct(_)
                | CatalogError::CategoryExists(_)
                | CatalogError::SubcategoryExists { .. }
                | CatalogError::IdSpaceExhausted(_) => StatusCode::CONFLICT,
                CatalogError::InvalidProduct(_)
                | CatalogError::ForeignCurrency { .. }
                | CatalogError::Json(_) => StatusCode::BAD_REQUEST,
            },
            Self::Auth(AuthError::InvalidCredentials) | Self::Unauthorized(_) => {
                StatusCode::UNAUTHORIZED
            }
            Self::Auth(_) => StatusCode::BAD_REQUEST,
            Self::Session(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    const fn is_server_error(&self) -> bool {
        matches!(self, Self::Session(_) | Self::Internal(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Session(_) | Self::Internal(_) => "Internal server error".to_string(),
            Self::NotFound(what) => format!("{what} not found"),
            Self::Unauthorized(msg) | Self::BadRequest(msg) => msg.clone(),
            _ => self.to_string(),
        };

        (self.status(), Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Set the Sentry user context for a signed-in customer.
pub fn set_sentry_user(email: &str) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            email: Some(email.to_string()),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

/// Add a breadcrumb for a shopper action.
///
/// Breadcrumbs show up in Sentry reports as the trail of actions leading to an
/// error.
pub fn add_breadcrumb(category: &str, message: &str, data: &[(&str, &str)]) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    for (key, value) in data {
        breadcrumb.data.insert(
            (*key).to_string(),
            serde_json::Value::String((*value).to_string()),
        );
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use brunelli_core::ProductId;

    async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::from(AddToCartError::MissingSize).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(ProductLookupError::NotFound(ProductId::new("99"))).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(CatalogError::CategoryExists("GIFTS".to_string())).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(CatalogError::ForeignCurrency {
                product: ProductId::new("7"),
                currency: brunelli_core::CurrencyCode::USD,
            })
            .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(CatalogError::IdSpaceExhausted(u64::MAX)).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(AuthError::InvalidCredentials).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::from(AuthError::PasswordMismatch).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(CheckoutError::EmptyCart).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal("boom".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_missing_size_body() {
        let (status, body) = body_of(AddToCartError::MissingSize.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "please select a size");
    }

    #[tokio::test]
    async fn test_internal_details_hidden() {
        let (status, body) = body_of(AppError::Internal("lock poisoned".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }
}
