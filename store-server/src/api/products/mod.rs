//! Product API module
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/products | GET | none |
//! | /api/products | POST | admin |
//! | /api/products/{slug} | GET | none |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/products", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{slug}", get(handler::get_by_slug))
}
