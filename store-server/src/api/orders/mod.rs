//! Order API module
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/orders | POST | none |
//! | /api/orders | GET | none |
//! | /api/orders/{order_id}/status | PATCH | admin |

mod handler;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{order_id}/status", patch(handler::update_status))
}
