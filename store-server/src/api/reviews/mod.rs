//! Review API module
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/reviews | POST (multipart) | none |
//! | /api/reviews | GET | none |

mod handler;

use axum::{Router, extract::DefaultBodyLimit, routing::get};

use crate::core::ServerState;
use crate::services::media::MAX_FILE_SIZE;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reviews", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        // Room for five images plus the text fields
        .layer(DefaultBodyLimit::max(handler::MAX_IMAGES * MAX_FILE_SIZE + 64 * 1024))
}
