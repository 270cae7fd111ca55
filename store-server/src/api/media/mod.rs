//! Media serving
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /media/{filename} | GET | none |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/media/{filename}", get(handler::serve))
}
