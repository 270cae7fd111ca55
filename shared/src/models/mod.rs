//! Wire/domain models
//!
//! These mirror the catalog collection schemas one-to-one so documents
//! round-trip untouched; derived fields (`discounted_price`, totals) are
//! always recomputed from authoritative inputs before use.

pub mod category;
pub mod order;
pub mod product;
pub mod user;

pub use category::Category;
pub use order::{Customer, OrderItem, OrderStatus};
pub use product::{
    CombinationKey, CombinationOption, ColorOption, Inventory, Pricing, PricingMode,
    ProductImage, ProductOptions, Ribbon, SizeOption, Stock,
};
pub use user::UserInfo;
