//! Newtype IDs for type-safe entity references.
//!
//! Catalog and cart identifiers are strings (the catalog fixture uses `"1"`,
//! `"2"`, ... and line items use a composite key), so the `define_id!` macro
//! wraps a `String` rather than an integer.

use serde::{Deserialize, Serialize};

/// Macro to define a type-safe, string-backed ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use brunelli_core::define_id;
/// define_id!(VoucherId);
/// define_id!(GiftCardId);
///
/// let voucher = VoucherId::new("V-1");
/// let card = GiftCardId::new("V-1");
///
/// // These are different types, so this won't compile:
/// // let _: VoucherId = card;
/// # let _ = (voucher, card);
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from anything string-like.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the underlying string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(LineItemId);

impl LineItemId {
    /// Compose the cart identity of a product selection.
    ///
    /// The key is `{product}-{size}-{color}`, so at most one line item exists
    /// per product, size and color combination.
    #[must_use]
    pub fn compose(product: &ProductId, size: &str, color: &str) -> Self {
        Self(format!("{product}-{size}-{color}"))
    }
}

/// Identifier of a placed order, e.g. `ORD-3F2A9C1B`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Prefix shared by every order number.
    pub const PREFIX: &'static str = "ORD-";

    /// Generate a fresh order number from a random v4 UUID.
    #[must_use]
    pub fn generate() -> Self {
        let simple = uuid::Uuid::new_v4().simple().to_string();
        let suffix: String = simple.chars().take(8).collect();
        Self(format!("{}{}", Self::PREFIX, suffix.to_uppercase()))
    }

    /// Get the order number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_id_composition() {
        let id = LineItemId::compose(&ProductId::new("1"), "M", "Navy");
        assert_eq!(id.as_str(), "1-M-Navy");
    }

    #[test]
    fn test_line_item_id_distinguishes_selections() {
        let product = ProductId::new("2");
        assert_ne!(
            LineItemId::compose(&product, "34B", "Black"),
            LineItemId::compose(&product, "34B", "Nude")
        );
    }

    #[test]
    fn test_order_id_format() {
        let id = OrderId::generate();
        assert!(id.as_str().starts_with(OrderId::PREFIX));
        assert_eq!(id.as_str().len(), OrderId::PREFIX.len() + 8);
        assert_ne!(id, OrderId::generate());
    }

    #[test]
    fn test_product_id_serde_transparent() {
        let id = ProductId::new("4");
        let json = serde_json::to_string(&id).unwrap_or_default();
        assert_eq!(json, "\"4\"");
    }
}
