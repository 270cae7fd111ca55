//! Cart API handlers
//!
//! Carts are keyed by user id. The client owns cart mutation; the server
//! stores snapshots wholesale, last write wins.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use shared::cart::CartItem;

use crate::core::ServerState;
use crate::db::repository::CartRepository;
use crate::utils::{AppError, AppResult};

#[derive(Serialize)]
pub struct CartResponse {
    pub items: Vec<CartItem>,
}

#[derive(Deserialize)]
pub struct SaveCartRequest {
    pub items: Vec<CartItem>,
}

#[derive(Serialize)]
pub struct SaveCartResponse {
    pub success: bool,
}

/// GET /api/cart/{user_id} - stored cart, 404 when the user has none
pub async fn get_cart(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<CartResponse>> {
    let repo = CartRepository::new(state.db.clone());
    let record = repo
        .find_by_user(&user_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No cart for user {}", user_id)))?;
    Ok(Json(CartResponse {
        items: record.items,
    }))
}

/// POST /api/cart/{user_id} - replace the stored cart. An empty item list
/// succeeds without touching storage.
pub async fn save_cart(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
    Json(payload): Json<SaveCartRequest>,
) -> AppResult<Json<SaveCartResponse>> {
    let repo = CartRepository::new(state.db.clone());
    repo.upsert(&user_id, payload.items).await?;
    Ok(Json(SaveCartResponse { success: true }))
}
