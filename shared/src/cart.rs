//! Cart aggregate
//!
//! Lines are identified by (product id, color, size); a missing color is a
//! distinct identity from an empty string. Totals are never stored as
//! authoritative state: every mutation recomputes them from the line list.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One cart line. `price` is the unit price the resolver produced when the
/// item was added; `max_quantity` is the stock ceiling captured at the same
/// moment (`None` for untracked variants).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product id
    pub id: String,
    pub name: String,
    pub price: Decimal,
    /// Public URL of the primary product image
    pub image: String,
    pub quantity: u32,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub max_quantity: Option<u32>,
}

impl CartItem {
    fn same_line(&self, id: &str, color: Option<&str>, size: Option<&str>) -> bool {
        self.id == id && self.color.as_deref() == color && self.size.as_deref() == size
    }

    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// The in-memory cart. Wraps the line list with the merge/clamp rules the
/// storefront applies on every mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from a stored snapshot.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a line. An existing line with the same (id, color, size) absorbs
    /// the quantity, clamped to the incoming line's stock ceiling; a new
    /// identity is appended as-is.
    pub fn add_item(&mut self, item: CartItem) {
        let existing = self.items.iter_mut().find(|line| {
            line.same_line(&item.id, item.color.as_deref(), item.size.as_deref())
        });
        match existing {
            Some(line) => {
                let merged = line.quantity.saturating_add(item.quantity);
                line.quantity = match item.max_quantity {
                    Some(ceiling) => merged.min(ceiling),
                    None => merged,
                };
            }
            None => self.items.push(item),
        }
    }

    /// Drop the line with this identity, if present.
    pub fn remove_item(&mut self, id: &str, color: Option<&str>, size: Option<&str>) {
        self.items.retain(|line| !line.same_line(id, color, size));
    }

    /// Set a line's quantity directly. Quantities below one are lifted to
    /// one; the stock ceiling is not re-applied here, matching the
    /// storefront's selector behavior.
    pub fn update_quantity(&mut self, id: &str, quantity: u32, color: Option<&str>, size: Option<&str>) {
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.same_line(id, color, size))
        {
            line.quantity = quantity.max(1);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    // ========== Derived totals ==========

    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(CartItem::subtotal).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    fn item(id: &str, color: Option<&str>, size: Option<&str>, quantity: u32) -> CartItem {
        CartItem {
            id: id.into(),
            name: format!("Product {id}"),
            price: dec("50"),
            image: "/media/p.jpg".into(),
            quantity,
            color: color.map(Into::into),
            size: size.map(Into::into),
            max_quantity: None,
        }
    }

    #[test]
    fn same_product_different_variant_is_a_new_line() {
        let mut cart = Cart::new();
        cart.add_item(item("p1", Some("Red"), Some("m"), 1));
        cart.add_item(item("p1", Some("Red"), Some("l"), 1));
        cart.add_item(item("p1", None, None, 1));
        assert_eq!(cart.items.len(), 3);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn matching_line_merges_quantities() {
        let mut cart = Cart::new();
        cart.add_item(item("p1", Some("Red"), Some("m"), 2));
        cart.add_item(item("p1", Some("Red"), Some("m"), 3));
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 5);
        assert_eq!(cart.total_price(), dec("250"));
    }

    #[test]
    fn merge_clamps_to_the_incoming_stock_ceiling() {
        let mut cart = Cart::new();
        cart.add_item(item("p1", None, None, 2));
        let mut more = item("p1", None, None, 5);
        more.max_quantity = Some(3);
        cart.add_item(more);
        assert_eq!(cart.items[0].quantity, 3);
    }

    #[test]
    fn missing_color_is_not_the_empty_string() {
        let mut cart = Cart::new();
        cart.add_item(item("p1", None, None, 1));
        cart.add_item(item("p1", Some(""), None, 1));
        assert_eq!(cart.items.len(), 2);
        cart.remove_item("p1", None, None);
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].color.as_deref(), Some(""));
    }

    #[test]
    fn update_quantity_floors_at_one_and_skips_the_ceiling() {
        let mut cart = Cart::new();
        let mut line = item("p1", None, None, 2);
        line.max_quantity = Some(3);
        cart.add_item(line);
        cart.update_quantity("p1", 0, None, None);
        assert_eq!(cart.items[0].quantity, 1);
        // Direct updates trust the caller; only merges clamp
        cart.update_quantity("p1", 9, None, None);
        assert_eq!(cart.items[0].quantity, 9);
    }

    #[test]
    fn totals_are_recomputed_after_every_mutation() {
        let mut cart = Cart::new();
        cart.add_item(item("p1", Some("Red"), None, 2));
        cart.add_item(item("p2", None, Some("m"), 1));
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), dec("150"));
        cart.remove_item("p1", Some("Red"), None);
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price(), dec("50"));
        cart.clear();
        assert_eq!(cart.total_price(), Decimal::ZERO);
        assert!(cart.is_empty());
    }
}
