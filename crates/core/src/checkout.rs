//! Checkout form validation and placed orders.
//!
//! No payment is processed. A valid form plus a non-empty cart becomes a
//! [`PlacedOrder`]; the caller is responsible for clearing the cart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::account::Customer;
use crate::cart::{CartLineItem, CartState};
use crate::pricing::OrderSummary;
use crate::types::{Email, OrderId, OrderStatus};

/// Country preselected on the shipping form.
pub const DEFAULT_COUNTRY: &str = "Italy";

/// Errors that block an order from being placed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("your cart is empty")]
    EmptyCart,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid email: {0}")]
    InvalidEmail(#[from] crate::types::EmailError),
}

/// Supported payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Card,
}

/// The checkout form as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutForm {
    pub email: String,
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub payment_method: PaymentMethod,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub card_name: String,
}

impl Default for CheckoutForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            phone: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            address: String::new(),
            city: String::new(),
            postal_code: String::new(),
            country: DEFAULT_COUNTRY.to_owned(),
            payment_method: PaymentMethod::Card,
            card_number: String::new(),
            expiry_date: String::new(),
            cvv: String::new(),
            card_name: String::new(),
        }
    }
}

/// Contact and shipping details that survive validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingDetails {
    pub email: Email,
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

fn required(value: &str, field: &'static str) -> Result<String, CheckoutError> {
    let value = value.trim();
    if value.is_empty() {
        Err(CheckoutError::MissingField(field))
    } else {
        Ok(value.to_owned())
    }
}

impl CheckoutForm {
    /// An empty form with the signed-in customer's contact fields filled in.
    #[must_use]
    pub fn prefilled(customer: Option<&Customer>) -> Self {
        let mut form = Self::default();
        if let Some(customer) = customer {
            form.email = customer.email.to_string();
            form.first_name.clone_from(&customer.first_name);
            form.last_name.clone_from(&customer.last_name);
        }
        form
    }

    /// Check every required field, in form order.
    ///
    /// Card details are required because card is the only payment method;
    /// they are checked for presence only and never stored.
    ///
    /// # Errors
    ///
    /// Returns the first [`CheckoutError::MissingField`] encountered, or
    /// [`CheckoutError::InvalidEmail`].
    pub fn validate(&self) -> Result<ShippingDetails, CheckoutError> {
        let email = Email::parse(&required(&self.email, "email")?)?;
        let details = ShippingDetails {
            email,
            phone: required(&self.phone, "phone")?,
            first_name: required(&self.first_name, "first name")?,
            last_name: required(&self.last_name, "last name")?,
            address: required(&self.address, "address")?,
            city: required(&self.city, "city")?,
            postal_code: required(&self.postal_code, "postal code")?,
            country: required(&self.country, "country")?,
        };

        match self.payment_method {
            PaymentMethod::Card => {
                required(&self.card_number, "card number")?;
                required(&self.expiry_date, "expiry date")?;
                required(&self.cvv, "cvv")?;
                required(&self.card_name, "name on card")?;
            }
        }

        Ok(details)
    }
}

/// A confirmed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub id: OrderId,
    pub placed_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub shipping: ShippingDetails,
    pub items: Vec<CartLineItem>,
    pub summary: OrderSummary,
}

/// Turn a cart and a submitted form into an order.
///
/// The cart is only read; clearing it after the order is placed is the
/// caller's job.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] for an empty cart, otherwise any
/// form validation error.
pub fn place_order(cart: &CartState, form: &CheckoutForm) -> Result<PlacedOrder, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    let shipping = form.validate()?;

    Ok(PlacedOrder {
        id: OrderId::generate(),
        placed_at: Utc::now(),
        status: OrderStatus::Processing,
        shipping,
        items: cart.items().to_vec(),
        summary: cart.summary(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::account;
    use crate::cart::{CartAction, line_item_for};
    use crate::catalog::Catalog;
    use crate::types::{Price, ProductId, Quantity};

    fn filled_form() -> CheckoutForm {
        CheckoutForm {
            email: "giulia@example.it".to_owned(),
            phone: "+39 02 1234567".to_owned(),
            first_name: "Giulia".to_owned(),
            last_name: "Rossi".to_owned(),
            address: "Via Roma 1".to_owned(),
            city: "Milano".to_owned(),
            postal_code: "20121".to_owned(),
            card_number: "4242 4242 4242 4242".to_owned(),
            expiry_date: "12/28".to_owned(),
            cvv: "123".to_owned(),
            card_name: "Giulia Rossi".to_owned(),
            ..CheckoutForm::default()
        }
    }

    fn cart_with_bra() -> CartState {
        let catalog = Catalog::demo();
        let bra = catalog.product(&ProductId::new("2")).unwrap();
        let line = line_item_for(bra, Some("34B"), Some("Nude"), Quantity::new(2)).unwrap();
        CartState::new().reduce(CartAction::AddItem(line))
    }

    #[test]
    fn test_prefill_from_customer() {
        let customer = account::login("mama@example.com", "secret1").unwrap();
        let form = CheckoutForm::prefilled(Some(&customer));
        assert_eq!(form.email, "mama@example.com");
        assert_eq!(form.first_name, "Sarah");
        assert_eq!(form.country, DEFAULT_COUNTRY);
        assert!(form.address.is_empty());

        assert_eq!(CheckoutForm::prefilled(None), CheckoutForm::default());
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut form = filled_form();
        form.city = "  ".to_owned();
        form.cvv = String::new();
        assert_eq!(form.validate(), Err(CheckoutError::MissingField("city")));
    }

    #[test]
    fn test_validate_requires_card_details() {
        let mut form = filled_form();
        form.card_name = String::new();
        assert_eq!(
            form.validate(),
            Err(CheckoutError::MissingField("name on card"))
        );
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let mut form = filled_form();
        form.email = "giulia".to_owned();
        assert!(matches!(form.validate(), Err(CheckoutError::InvalidEmail(_))));
    }

    #[test]
    fn test_place_order_on_empty_cart() {
        assert_eq!(
            place_order(&CartState::new(), &filled_form()),
            Err(CheckoutError::EmptyCart)
        );
    }

    #[test]
    fn test_place_order_snapshots_cart() {
        let cart = cart_with_bra();
        let order = place_order(&cart, &filled_form()).unwrap();
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.items, cart.items());
        assert_eq!(order.summary.subtotal, Price::eur(90));
        assert_eq!(order.summary.total.display(), "€99.95");
        assert_eq!(order.shipping.city, "Milano");
        // Placing an order leaves the cart to the caller.
        assert_eq!(cart.line_count(), 1);
    }
}
