//! Authentication service.
//!
//! Wraps the mock provider in `brunelli_core::account` and keeps the session
//! and Sentry scope in step with the signed-in identity.

use brunelli_core::account::{self, AuthError, Customer, Registration};
use secrecy::{ExposeSecret, SecretString};
use tower_sessions::Session;
use tracing::info;

use crate::error::{AppError, clear_sentry_user, set_sentry_user};
use crate::middleware::{clear_current_customer, set_admin, set_current_customer};

/// Session-bound authentication service.
pub struct AuthService<'a> {
    session: &'a Session,
}

impl<'a> AuthService<'a> {
    #[must_use]
    pub const fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Sign in and remember the customer in the session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` from the provider, or a session
    /// error.
    pub async fn login(&self, email: &str, password: &str) -> Result<Customer, AppError> {
        let customer = account::login(email, password)?;
        self.remember(&customer).await?;
        info!(email = %customer.email, "Customer signed in");
        Ok(customer)
    }

    /// Register and sign in.
    ///
    /// # Errors
    ///
    /// Returns the first registration error in form order, or a session error.
    pub async fn register(&self, form: &Registration) -> Result<Customer, AppError> {
        let customer = account::register(form)?;
        self.remember(&customer).await?;
        info!(email = %customer.email, "Customer registered");
        Ok(customer)
    }

    /// Forget the signed-in customer. Cart and wishlist stay with the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be modified.
    pub async fn logout(&self) -> Result<(), AppError> {
        clear_current_customer(self.session).await?;
        clear_sentry_user();
        Ok(())
    }

    /// Grant admin rights to this session if `password` matches.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when no admin password is configured and
    /// `AuthError::InvalidCredentials` on a mismatch.
    pub async fn admin_login(
        &self,
        configured: Option<&SecretString>,
        password: &str,
    ) -> Result<(), AppError> {
        let configured = configured.ok_or_else(|| AppError::NotFound("admin".to_string()))?;
        if !constant_time_eq(configured.expose_secret().as_bytes(), password.as_bytes()) {
            tracing::warn!("Rejected admin login");
            return Err(AuthError::InvalidCredentials.into());
        }
        set_admin(self.session, true).await?;
        info!("Admin signed in");
        Ok(())
    }

    /// Drop admin rights from this session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be modified.
    pub async fn admin_logout(&self) -> Result<(), AppError> {
        set_admin(self.session, false).await?;
        Ok(())
    }

    async fn remember(&self, customer: &Customer) -> Result<(), AppError> {
        // New identity, new session id.
        self.session.cycle_id().await?;
        set_current_customer(self.session, customer).await?;
        set_sentry_user(customer.email.as_str());
        Ok(())
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"bump-2024", b"bump-2024"));
        assert!(!constant_time_eq(b"bump-2024", b"bump-2025"));
        assert!(!constant_time_eq(b"bump", b"bump-2024"));
    }
}
