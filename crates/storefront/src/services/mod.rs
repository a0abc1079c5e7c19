//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Mock customer sign-in and admin password check
//! - `checkout` - Order placement with simulated payment

pub mod auth;
pub mod checkout;
