//! Product catalog types
//!
//! A product carries exactly one active pricing shape, determined by which
//! option tables are non-empty:
//!
//! | Shape | Source of price/stock |
//! |-------|-----------------------|
//! | Base | `pricing` + `inventory` groups on the product itself |
//! | Colors only | the matching color entry |
//! | Sizes only | the matching size entry |
//! | Colors + sizes | both entries, price additive, stock binding minimum |
//! | Combinations | the explicit (color, size) entry, strictly prioritized |
//!
//! The storage layer keeps all shapes as optional groups for compatibility
//! with the catalog collection schema; [`PricingMode`] exposes the active
//! shape as a tagged union for domain code.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Pricing block shared by base products and variant entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub on_sale: bool,
    /// Discount percentage (0–100), only meaningful while `on_sale`
    #[serde(default)]
    pub discount: Option<Decimal>,
    /// Stored derived field; recomputed via [`Pricing::normalize`] before
    /// persistence and never trusted when reading
    #[serde(default)]
    pub discounted_price: Option<Decimal>,
}

impl Pricing {
    /// Sale price rounded to two decimals, when the sale inputs are complete.
    pub fn discounted(&self) -> Option<Decimal> {
        match (self.on_sale, self.price, self.discount) {
            (true, Some(price), Some(discount)) => Some(
                (price - price * discount / Decimal::ONE_HUNDRED)
                    .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            ),
            _ => None,
        }
    }

    /// Effective unit price: the discounted price while on sale, else the
    /// list price, else zero.
    pub fn effective(&self) -> Decimal {
        self.discounted().or(self.price).unwrap_or_default()
    }

    /// Refresh the stored `discounted_price` from the authoritative inputs.
    pub fn normalize(&mut self) {
        self.discounted_price = self.discounted().or(self.price);
    }
}

/// Base inventory group (variant entries carry the same two fields inline).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    #[serde(default)]
    pub track_inventory: bool,
    #[serde(default)]
    pub quantity: Option<i64>,
}

impl Inventory {
    pub fn stock(&self) -> Stock {
        variant_stock(self.track_inventory, self.quantity)
    }
}

/// Available stock for a selection.
///
/// Untracked inventory is explicitly unlimited; the finite 999 the
/// storefront shows for such items is a display cap, not a stored quantity,
/// so quantity selectors never accidentally limit untracked purchases.
///
/// Ordering: any tracked quantity sorts below `Unlimited`, so `std::cmp::min`
/// yields the binding constraint of two stocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stock {
    Tracked(u32),
    Unlimited,
}

impl Stock {
    /// Cap used when a finite number must be shown for unlimited stock.
    pub const DISPLAY_CAP: u32 = 999;

    pub fn is_out(&self) -> bool {
        matches!(self, Stock::Tracked(0))
    }

    /// Units for display and quantity-selector ceilings.
    pub fn display_units(&self) -> u32 {
        match self {
            Stock::Unlimited => Self::DISPLAY_CAP,
            Stock::Tracked(n) => *n,
        }
    }

    /// Hard purchase ceiling; `None` when the variant is untracked.
    pub fn ceiling(&self) -> Option<u32> {
        match self {
            Stock::Unlimited => None,
            Stock::Tracked(n) => Some(*n),
        }
    }
}

fn variant_stock(track_inventory: bool, quantity: Option<i64>) -> Stock {
    if track_inventory {
        Stock::Tracked(quantity.unwrap_or(0).max(0) as u32)
    } else {
        Stock::Unlimited
    }
}

/// A color entry in the independent color table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorOption {
    /// Hex value, e.g. `#FF0000`
    pub color: String,
    #[serde(default)]
    pub pricing: Option<Pricing>,
    #[serde(default)]
    pub track_inventory: bool,
    #[serde(default)]
    pub quantity: Option<i64>,
}

impl ColorOption {
    pub fn effective_price(&self) -> Decimal {
        self.pricing.as_ref().map(Pricing::effective).unwrap_or_default()
    }

    pub fn stock(&self) -> Stock {
        variant_stock(self.track_inventory, self.quantity)
    }
}

/// A size entry in the independent size table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeOption {
    /// Size code, e.g. `m`, `xl`
    pub value: String,
    #[serde(default)]
    pub pricing: Option<Pricing>,
    #[serde(default)]
    pub track_inventory: bool,
    #[serde(default)]
    pub quantity: Option<i64>,
}

impl SizeOption {
    pub fn effective_price(&self) -> Decimal {
        self.pricing.as_ref().map(Pricing::effective).unwrap_or_default()
    }

    pub fn stock(&self) -> Stock {
        variant_stock(self.track_inventory, self.quantity)
    }
}

/// The (color, size) key of an explicit combination entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinationKey {
    pub color: String,
    /// Human-readable color name, derived from the color palette
    #[serde(default)]
    pub color_label: Option<String>,
    pub size: String,
}

/// An explicit color×size combination. Only listed combinations are valid;
/// all other pairs are unavailable even when both axes exist elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinationOption {
    pub combination: CombinationKey,
    #[serde(default)]
    pub pricing: Option<Pricing>,
    #[serde(default)]
    pub track_inventory: bool,
    #[serde(default)]
    pub quantity: Option<i64>,
}

impl CombinationOption {
    pub fn matches(&self, color: &str, size: &str) -> bool {
        self.combination.color == color && self.combination.size == size
    }

    pub fn effective_price(&self) -> Decimal {
        self.pricing.as_ref().map(Pricing::effective).unwrap_or_default()
    }

    pub fn stock(&self) -> Stock {
        variant_stock(self.track_inventory, self.quantity)
    }
}

/// The three variant tables attached to a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductOptions {
    #[serde(default)]
    pub colors: Vec<ColorOption>,
    #[serde(default)]
    pub sizes: Vec<SizeOption>,
    #[serde(default)]
    pub combinations: Vec<CombinationOption>,
}

impl ProductOptions {
    pub fn has_colors(&self) -> bool {
        !self.colors.is_empty()
    }

    pub fn has_sizes(&self) -> bool {
        !self.sizes.is_empty()
    }

    pub fn has_combinations(&self) -> bool {
        !self.combinations.is_empty()
    }

    /// The active pricing shape. Combinations strictly win; base is the
    /// fallback when no axis exists.
    pub fn mode(&self) -> PricingMode<'_> {
        if self.has_combinations() {
            PricingMode::Combinations(&self.combinations)
        } else if self.has_colors() && self.has_sizes() {
            PricingMode::ColorsAndSizes {
                colors: &self.colors,
                sizes: &self.sizes,
            }
        } else if self.has_colors() {
            PricingMode::ColorsOnly(&self.colors)
        } else if self.has_sizes() {
            PricingMode::SizesOnly(&self.sizes)
        } else {
            PricingMode::Base
        }
    }
}

/// Tagged-union view over the optional option tables.
#[derive(Debug, Clone, Copy)]
pub enum PricingMode<'a> {
    /// Explicit combination entries; both axes required for a selection
    Combinations(&'a [CombinationOption]),
    /// Both independent tables, no combinations: additive price, min stock
    ColorsAndSizes {
        colors: &'a [ColorOption],
        sizes: &'a [SizeOption],
    },
    ColorsOnly(&'a [ColorOption]),
    SizesOnly(&'a [SizeOption]),
    /// No variant tables; the product-level pricing/inventory groups apply
    Base,
}

/// One product image (up to four per product).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    /// Public URL of the media document
    pub image: String,
    #[serde(default)]
    pub alt_text: Option<String>,
}

/// Promotional ribbon shown on listing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ribbon {
    New,
    Featured,
    Bestseller,
    Sale,
    Limited,
    Outofstock,
}

/// Derive a URL slug from a product name: lowercase, non-alphanumeric runs
/// collapsed to `-`, trimmed at both ends.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    #[test]
    fn discount_is_recomputed_from_inputs() {
        let pricing = Pricing {
            price: Some(dec("200")),
            on_sale: true,
            discount: Some(dec("25")),
            // A stale stored value must not leak through
            discounted_price: Some(dec("1")),
        };
        assert_eq!(pricing.discounted(), Some(dec("150.00")));
        assert_eq!(pricing.effective(), dec("150.00"));
    }

    #[test]
    fn effective_price_ignores_discount_when_not_on_sale() {
        let pricing = Pricing {
            price: Some(dec("200")),
            on_sale: false,
            discount: Some(dec("25")),
            discounted_price: None,
        };
        assert_eq!(pricing.effective(), dec("200"));
    }

    #[test]
    fn discount_rounds_half_away_from_zero() {
        // 99.99 - 33% = 66.9933 -> 66.99; 10.05 - 50% = 5.025 -> 5.03
        let pricing = Pricing {
            price: Some(dec("10.05")),
            on_sale: true,
            discount: Some(dec("50")),
            discounted_price: None,
        };
        assert_eq!(pricing.discounted(), Some(dec("5.03")));
    }

    #[test]
    fn normalize_falls_back_to_list_price() {
        let mut pricing = Pricing {
            price: Some(dec("80")),
            on_sale: false,
            discount: None,
            discounted_price: None,
        };
        pricing.normalize();
        assert_eq!(pricing.discounted_price, Some(dec("80")));
    }

    #[test]
    fn untracked_inventory_is_unlimited_not_999() {
        let inv = Inventory {
            track_inventory: false,
            quantity: Some(4),
        };
        assert_eq!(inv.stock(), Stock::Unlimited);
        assert_eq!(inv.stock().display_units(), Stock::DISPLAY_CAP);
        assert_eq!(inv.stock().ceiling(), None);
    }

    #[test]
    fn tracked_inventory_without_quantity_is_zero() {
        let inv = Inventory {
            track_inventory: true,
            quantity: None,
        };
        assert_eq!(inv.stock(), Stock::Tracked(0));
        assert!(inv.stock().is_out());
    }

    #[test]
    fn stock_min_takes_the_binding_constraint() {
        assert_eq!(Stock::Tracked(3).min(Stock::Unlimited), Stock::Tracked(3));
        assert_eq!(Stock::Unlimited.min(Stock::Tracked(7)), Stock::Tracked(7));
        assert_eq!(Stock::Unlimited.min(Stock::Unlimited), Stock::Unlimited);
        assert_eq!(Stock::Tracked(2).min(Stock::Tracked(5)), Stock::Tracked(2));
    }

    #[test]
    fn mode_prefers_combinations_over_axis_tables() {
        let options = ProductOptions {
            colors: vec![ColorOption {
                color: "#FF0000".into(),
                pricing: None,
                track_inventory: false,
                quantity: None,
            }],
            sizes: vec![],
            combinations: vec![CombinationOption {
                combination: CombinationKey {
                    color: "#FF0000".into(),
                    color_label: Some("Red".into()),
                    size: "m".into(),
                },
                pricing: None,
                track_inventory: false,
                quantity: None,
            }],
        };
        assert!(matches!(options.mode(), PricingMode::Combinations(_)));
    }

    #[test]
    fn slugify_matches_catalog_convention() {
        assert_eq!(slugify("Classic White Tee"), "classic-white-tee");
        assert_eq!(slugify("  Rug (2x3m) — Blue!  "), "rug-2x3m-blue");
        assert_eq!(slugify("---"), "");
    }
}
