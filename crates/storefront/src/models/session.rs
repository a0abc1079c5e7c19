//! Session-scoped shopper state.
//!
//! Cart, wishlist, identity and order history are stored as JSON values in
//! the tower-sessions record under the keys below. A missing key reads as the
//! empty value.

use serde::{Serialize, de::DeserializeOwned};
use tower_sessions::Session;

/// Session keys for shopper state.
pub mod keys {
    /// Key for the `CartState`.
    pub const CART: &str = "cart";

    /// Key for the `Wishlist`.
    pub const WISHLIST: &str = "wishlist";

    /// Key for the signed-in `Customer`.
    pub const CURRENT_CUSTOMER: &str = "current_customer";

    /// Key for the admin flag set by `/admin/login`.
    pub const IS_ADMIN: &str = "is_admin";

    /// Key for the `Vec<PlacedOrder>` history.
    pub const ORDERS: &str = "orders";
}

/// Read a session value, defaulting when absent.
///
/// # Errors
///
/// Returns an error if the session store fails or the stored value no longer
/// deserializes.
pub async fn load<T>(session: &Session, key: &str) -> Result<T, tower_sessions::session::Error>
where
    T: Default + DeserializeOwned,
{
    Ok(session.get::<T>(key).await?.unwrap_or_default())
}

/// Write a session value.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn store<T>(
    session: &Session,
    key: &str,
    value: &T,
) -> Result<(), tower_sessions::session::Error>
where
    T: Serialize + Send + Sync,
{
    session.insert(key, value).await
}
