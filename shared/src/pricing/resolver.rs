use rust_decimal::Decimal;

use crate::models::product::{Inventory, Pricing, PricingMode, ProductOptions, Stock};

/// Price and stock for one concrete selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved {
    pub price: Decimal,
    pub stock: Stock,
}

impl Resolved {
    /// A selection that matches no catalog entry: nothing to charge,
    /// nothing to sell.
    pub const UNAVAILABLE: Resolved = Resolved {
        price: Decimal::ZERO,
        stock: Stock::Tracked(0),
    };
}

/// The shopper's current (color, size) pick. Either axis may be absent;
/// which axes are required depends on the product's pricing shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub color: Option<String>,
    pub size: Option<String>,
}

impl Selection {
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }
}

/// Read-only view over a product's pricing inputs.
///
/// Resolution priority: explicit combinations, then the dual-axis tables
/// (additive price, binding-minimum stock), then a single axis, then the
/// product-level base groups.
pub struct VariantResolver<'a> {
    options: &'a ProductOptions,
    base_pricing: Option<&'a Pricing>,
    base_inventory: Option<&'a Inventory>,
}

impl<'a> VariantResolver<'a> {
    pub fn new(
        options: &'a ProductOptions,
        base_pricing: Option<&'a Pricing>,
        base_inventory: Option<&'a Inventory>,
    ) -> Self {
        Self {
            options,
            base_pricing,
            base_inventory,
        }
    }

    // ========== Axis enumeration ==========

    /// Colors the shopper can pick from. With combinations these are the
    /// distinct colors that appear in combination keys, in first-seen
    /// order; otherwise the color table as stored.
    pub fn available_colors(&self) -> Vec<&'a str> {
        if self.options.has_combinations() {
            let mut seen: Vec<&str> = Vec::new();
            for combo in &self.options.combinations {
                let color = combo.combination.color.as_str();
                if !seen.contains(&color) {
                    seen.push(color);
                }
            }
            seen
        } else {
            self.options.colors.iter().map(|c| c.color.as_str()).collect()
        }
    }

    pub fn available_sizes(&self) -> Vec<&'a str> {
        if self.options.has_combinations() {
            let mut seen: Vec<&str> = Vec::new();
            for combo in &self.options.combinations {
                let size = combo.combination.size.as_str();
                if !seen.contains(&size) {
                    seen.push(size);
                }
            }
            seen
        } else {
            self.options.sizes.iter().map(|s| s.value.as_str()).collect()
        }
    }

    /// Whether an explicit (color, size) combination entry exists. Only
    /// meaningful in combination mode; pairs not listed are unavailable
    /// even when both values appear in other entries.
    pub fn is_combination_available(&self, color: &str, size: &str) -> bool {
        self.options
            .combinations
            .iter()
            .any(|c| c.matches(color, size))
    }

    /// Sizes still selectable once a color is fixed (combination mode).
    pub fn sizes_for_color(&self, color: &str) -> Vec<&'a str> {
        self.available_sizes()
            .into_iter()
            .filter(|size| self.is_combination_available(color, size))
            .collect()
    }

    /// Colors still selectable once a size is fixed (combination mode).
    pub fn colors_for_size(&self, size: &str) -> Vec<&'a str> {
        self.available_colors()
            .into_iter()
            .filter(|color| self.is_combination_available(color, size))
            .collect()
    }

    // ========== Selection lifecycle ==========

    /// Default selection when the detail page opens: the first combination's
    /// key, else the first entry of each present axis, else nothing.
    pub fn initial_selection(&self) -> Selection {
        match self.options.mode() {
            PricingMode::Combinations(combos) => {
                let first = &combos[0].combination;
                Selection {
                    color: Some(first.color.clone()),
                    size: Some(first.size.clone()),
                }
            }
            PricingMode::ColorsAndSizes { colors, sizes } => Selection {
                color: Some(colors[0].color.clone()),
                size: Some(sizes[0].value.clone()),
            },
            PricingMode::ColorsOnly(colors) => Selection {
                color: Some(colors[0].color.clone()),
                size: None,
            },
            PricingMode::SizesOnly(sizes) => Selection {
                color: None,
                size: Some(sizes[0].value.clone()),
            },
            PricingMode::Base => Selection::default(),
        }
    }

    /// Whether the selection is complete enough to add to cart. Combination
    /// mode needs both axes and a listed pair; axis modes need their axes;
    /// base products are always valid.
    pub fn is_valid_selection(&self, color: Option<&str>, size: Option<&str>) -> bool {
        match self.options.mode() {
            PricingMode::Combinations(_) => match (color, size) {
                (Some(c), Some(s)) => self.is_combination_available(c, s),
                _ => false,
            },
            PricingMode::ColorsAndSizes { .. } => color.is_some() && size.is_some(),
            PricingMode::ColorsOnly(_) => color.is_some(),
            PricingMode::SizesOnly(_) => size.is_some(),
            PricingMode::Base => true,
        }
    }

    // ========== Resolution ==========

    /// Unit price and stock for a selection. A selection that matches no
    /// entry of the active shape resolves to [`Resolved::UNAVAILABLE`]
    /// rather than leaking base pricing.
    pub fn resolve(&self, color: Option<&str>, size: Option<&str>) -> Resolved {
        match self.options.mode() {
            PricingMode::Combinations(combos) => {
                let (Some(color), Some(size)) = (color, size) else {
                    return Resolved::UNAVAILABLE;
                };
                combos
                    .iter()
                    .find(|c| c.matches(color, size))
                    .map(|c| Resolved {
                        price: c.effective_price(),
                        stock: c.stock(),
                    })
                    .unwrap_or(Resolved::UNAVAILABLE)
            }
            PricingMode::ColorsAndSizes { colors, sizes } => {
                let (Some(color), Some(size)) = (color, size) else {
                    return Resolved::UNAVAILABLE;
                };
                let color_entry = colors.iter().find(|c| c.color == color);
                let size_entry = sizes.iter().find(|s| s.value == size);
                match (color_entry, size_entry) {
                    (Some(c), Some(s)) => Resolved {
                        price: c.effective_price() + s.effective_price(),
                        stock: c.stock().min(s.stock()),
                    },
                    _ => Resolved::UNAVAILABLE,
                }
            }
            PricingMode::ColorsOnly(colors) => color
                .and_then(|color| colors.iter().find(|c| c.color == color))
                .map(|c| Resolved {
                    price: c.effective_price(),
                    stock: c.stock(),
                })
                .unwrap_or(Resolved::UNAVAILABLE),
            PricingMode::SizesOnly(sizes) => size
                .and_then(|size| sizes.iter().find(|s| s.value == size))
                .map(|s| Resolved {
                    price: s.effective_price(),
                    stock: s.stock(),
                })
                .unwrap_or(Resolved::UNAVAILABLE),
            PricingMode::Base => Resolved {
                price: self
                    .base_pricing
                    .map(Pricing::effective)
                    .unwrap_or_default(),
                stock: self
                    .base_inventory
                    .map(Inventory::stock)
                    .unwrap_or(Stock::Unlimited),
            },
        }
    }

    /// Purchase ceiling for a selection; `None` when untracked.
    pub fn max_quantity(&self, color: Option<&str>, size: Option<&str>) -> Option<u32> {
        self.resolve(color, size).stock.ceiling()
    }

    /// Price shown on listing cards: base pricing when the product carries
    /// a list price, otherwise the resolved price of the default selection.
    /// Covers every pricing shape with the same arithmetic the detail page
    /// uses.
    pub fn display_price(&self) -> Decimal {
        if let Some(pricing) = self.base_pricing {
            if pricing.price.is_some() {
                return pricing.effective();
            }
        }
        let initial = self.initial_selection();
        self.resolve(initial.color(), initial.size()).price
    }
}
