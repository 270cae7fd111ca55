//! Storefront shared domain crate
//!
//! Types and logic shared between the HTTP server and any client-side
//! consumers:
//!
//! - **Models** (`models`): catalog, cart, order and review wire types
//! - **Pricing** (`pricing`): variant price/stock resolution
//! - **Cart** (`cart`): the cart aggregate (line merge, clamping, totals)
//! - **Checkout** (`checkout`): cart + shipping form → immutable order request

pub mod cart;
pub mod checkout;
pub mod models;
pub mod pricing;

// Re-export the types nearly every consumer touches
pub use cart::{Cart, CartItem};
pub use checkout::{CheckoutError, OrderRequest, derive_order};
pub use models::order::OrderStatus;
pub use models::product::Stock;
pub use pricing::{Resolved, VariantResolver};
