//! Brunelli Core - Domain library for the maternity storefront.
//!
//! This crate holds everything the storefront decides, none of what it
//! serves:
//! - `storefront` - JSON service holding per-session carts and wishlists
//! - `cli` - Command-line catalog queries and cart quotes
//!
//! # Architecture
//!
//! The core crate contains only types, pure state transitions and in-memory
//! stores - no I/O, no HTTP, no clocks other than order timestamps. Every
//! operation here is synchronous and total over well-formed input.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, quantities, emails and statuses
//! - [`catalog`] - Products, the category tree, the filter/sort pipeline and the admin store
//! - [`cart`] - The cart state machine and line-item construction
//! - [`pricing`] - Shipping rules and order summaries
//! - [`wishlist`] - The wishlist set
//! - [`checkout`] - Checkout form validation and placed orders
//! - [`account`] - Mock customer identities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod account;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod pricing;
pub mod types;
pub mod wishlist;

pub use types::*;
