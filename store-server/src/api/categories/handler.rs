//! Category API handlers

use axum::{Json, extract::State};

use shared::models::Category as SharedCategory;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::CategoryCreate;
use crate::db::repository::CategoryRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/categories - all categories, alphabetical
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SharedCategory>>> {
    let repo = CategoryRepository::new(state.db.clone());
    let categories = repo.find_all().await?;
    Ok(Json(categories.into_iter().map(|c| c.into()).collect()))
}

/// POST /api/categories - create a category (admin only)
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<SharedCategory>> {
    if !user.is_admin() {
        return Err(AppError::forbidden("Admin access required"));
    }

    let repo = CategoryRepository::new(state.db.clone());
    let category = repo.create(payload).await?;
    Ok(Json(category.into()))
}
