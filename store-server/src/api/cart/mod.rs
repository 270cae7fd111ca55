//! Cart API module
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/cart/{user_id} | GET | none |
//! | /api/cart/{user_id} | POST | none |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/cart", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/{user_id}", get(handler::get_cart).post(handler::save_cart))
}
