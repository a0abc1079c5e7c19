//! Mock customer identities.
//!
//! There is no user database. Signing in accepts any well-formed email with a
//! long-enough password and returns the demo customer under that email;
//! registering returns the identity that was typed in.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Email, EmailError};

/// Minimum password length accepted by the mock provider.
pub const MIN_PASSWORD_LENGTH: usize = 6;

const DEMO_FIRST_NAME: &str = "Sarah";
const DEMO_LAST_NAME: &str = "Johnson";

/// A signed-in shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
}

impl Customer {
    /// "First Last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Errors from sign-in and registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("password must be at least {} characters", MIN_PASSWORD_LENGTH)]
    WeakPassword,

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("please accept the terms and conditions")]
    TermsNotAccepted,

    #[error("first and last name are required")]
    MissingName,
}

/// Registration form input.
#[derive(Debug, Clone, Deserialize)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(default)]
    pub accept_terms: bool,
}

/// Sign in against the mock provider.
///
/// # Errors
///
/// Returns [`AuthError::InvalidCredentials`] if the email does not parse or
/// the password is shorter than [`MIN_PASSWORD_LENGTH`].
pub fn login(email: &str, password: &str) -> Result<Customer, AuthError> {
    let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::InvalidCredentials);
    }
    Ok(Customer {
        first_name: DEMO_FIRST_NAME.to_owned(),
        last_name: DEMO_LAST_NAME.to_owned(),
        email,
    })
}

/// Register a new mock account.
///
/// # Errors
///
/// Checks in form order: password confirmation, terms, names, email,
/// password length.
pub fn register(form: &Registration) -> Result<Customer, AuthError> {
    if form.password != form.confirm_password {
        return Err(AuthError::PasswordMismatch);
    }
    if !form.accept_terms {
        return Err(AuthError::TermsNotAccepted);
    }
    let first_name = form.first_name.trim();
    let last_name = form.last_name.trim();
    if first_name.is_empty() || last_name.is_empty() {
        return Err(AuthError::MissingName);
    }
    let email = Email::parse(&form.email)?;
    if form.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword);
    }
    Ok(Customer {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email,
    })
}
