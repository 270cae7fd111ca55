//! Database entities
//!
//! Entities carry a `RecordId` assigned by SurrealDB; `*Create` payloads are
//! what handlers accept. Shared wire types (pricing shapes, cart items,
//! customer/order items) come from the `shared` crate so the domain core and
//! storage never drift apart.

pub mod cart;
pub mod category;
pub mod media;
pub mod order;
pub mod product;
pub mod review;
pub mod serde_helpers;
pub mod user;

pub use cart::CartRecord;
pub use category::{Category, CategoryCreate};
pub use media::Media;
pub use order::{Order, OrderId};
pub use product::{Product, ProductCreate, ProductId};
pub use review::{Review, ReviewId};
pub use user::{User, UserCreate, UserId};
