//! Order derivation
//!
//! Turns (cart, shipping form) into an immutable order request. The cart is
//! rejected before any validation or I/O when empty; the total is always
//! recomputed from the frozen lines, never taken from the caller.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateEmail;

use crate::cart::Cart;
use crate::models::order::{Customer, OrderItem, OrderStatus};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("invalid email address")]
    InvalidEmail,
}

/// The payload submitted to the orders endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub total_price: Decimal,
    pub status: OrderStatus,
}

impl OrderRequest {
    /// Sum of line subtotals, independent of the stored `total_price`.
    pub fn recomputed_total(&self) -> Decimal {
        self.items.iter().map(OrderItem::subtotal).sum()
    }
}

fn require(field: &'static str, value: &str) -> Result<(), CheckoutError> {
    if value.trim().is_empty() {
        Err(CheckoutError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Validate the shipping form. Field checks run in form order so the first
/// error reported matches the first offending input.
pub fn validate_customer(customer: &Customer) -> Result<(), CheckoutError> {
    require("name", &customer.name)?;
    require("email", &customer.email)?;
    if !customer.email.validate_email() {
        return Err(CheckoutError::InvalidEmail);
    }
    require("address", &customer.address)?;
    require("city", &customer.city)?;
    require("state", &customer.state)?;
    require("zip", &customer.zip)?;
    require("country", &customer.country)?;
    Ok(())
}

/// Derive an order request from the cart and the shipping form.
///
/// Line items freeze the cart's resolved unit prices and variant choices;
/// later catalog edits cannot retroactively change what was ordered. The
/// initial status is always `pending`.
pub fn derive_order(cart: &Cart, customer: Customer) -> Result<OrderRequest, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    validate_customer(&customer)?;

    let items: Vec<OrderItem> = cart
        .items
        .iter()
        .map(|line| OrderItem {
            product: line.id.clone(),
            quantity: line.quantity,
            price: line.price,
            color: line.color.clone(),
            size: line.size.clone(),
        })
        .collect();
    let total_price = items.iter().map(OrderItem::subtotal).sum();

    Ok(OrderRequest {
        customer,
        items,
        total_price,
        status: OrderStatus::Pending,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartItem;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    fn customer() -> Customer {
        Customer {
            name: "Asha Verma".into(),
            email: "asha@example.com".into(),
            address: "12 Hill Road".into(),
            city: "Mumbai".into(),
            state: "MH".into(),
            zip: "400050".into(),
            country: "India".into(),
        }
    }

    fn cart() -> Cart {
        Cart::from_items(vec![
            CartItem {
                id: "p1".into(),
                name: "Tee".into(),
                price: dec("50"),
                image: "/media/tee.jpg".into(),
                quantity: 2,
                color: Some("Red".into()),
                size: Some("m".into()),
                max_quantity: Some(10),
            },
            CartItem {
                id: "p2".into(),
                name: "Rug".into(),
                price: dec("150"),
                image: "/media/rug.jpg".into(),
                quantity: 1,
                color: None,
                size: None,
                max_quantity: None,
            },
        ])
    }

    #[test]
    fn empty_cart_is_rejected_before_validation() {
        // Empty form would also fail, but the cart check comes first
        let empty_customer = Customer {
            name: String::new(),
            email: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            country: String::new(),
        };
        assert_eq!(
            derive_order(&Cart::new(), empty_customer),
            Err(CheckoutError::EmptyCart)
        );
    }

    #[test]
    fn missing_fields_report_in_form_order() {
        let mut c = customer();
        c.city = "  ".into();
        assert_eq!(
            derive_order(&cart(), c),
            Err(CheckoutError::MissingField("city"))
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut c = customer();
        c.email = "not-an-email".into();
        assert_eq!(derive_order(&cart(), c), Err(CheckoutError::InvalidEmail));
    }

    #[test]
    fn order_total_equals_the_sum_of_frozen_lines() {
        let order = derive_order(&cart(), customer()).unwrap();
        // 2 × 50 + 1 × 150
        assert_eq!(order.total_price, dec("250"));
        assert_eq!(order.recomputed_total(), order.total_price);
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn lines_freeze_price_and_variant_choice() {
        let order = derive_order(&cart(), customer()).unwrap();
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].product, "p1");
        assert_eq!(order.items[0].price, dec("50"));
        assert_eq!(order.items[0].color.as_deref(), Some("Red"));
        assert_eq!(order.items[1].size, None);
    }

    #[test]
    fn request_serializes_with_camel_case_total() {
        let order = derive_order(&cart(), customer()).unwrap();
        let json = serde_json::to_value(&order).unwrap();
        assert!(json.get("totalPrice").is_some());
        assert_eq!(json["status"], "pending");
    }
}
