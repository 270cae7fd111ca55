//! HTTP API routes
//!
//! One module per resource, each exposing a `router()` that the server
//! merges in `core::server::build_app`.

pub mod auth;
pub mod cart;
pub mod categories;
pub mod health;
pub mod media;
pub mod orders;
pub mod products;
pub mod reviews;
