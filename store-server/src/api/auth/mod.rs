//! Authentication API module
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/auth/register | POST | none |
//! | /api/auth/login | POST | none |
//! | /api/auth/verify | POST | none |
//! | /api/auth/check | GET | optional bearer |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/auth", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/register", post(handler::register))
        .route("/login", post(handler::login))
        .route("/verify", post(handler::verify))
        .route("/check", get(handler::check))
}
