//! Variant price and stock resolution
//!
//! One authoritative place turns (product options, selection) into a unit
//! price and available stock. The product detail page, the listing card,
//! cart ceilings and order derivation all go through [`VariantResolver`],
//! so a price shown anywhere is the price charged everywhere.

mod resolver;

pub use resolver::{Resolved, Selection, VariantResolver};
