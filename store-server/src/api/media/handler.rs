//! Serves stored review images from `work_dir/media`.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// GET /media/{filename}
pub async fn serve(
    State(state): State<ServerState>,
    Path(filename): Path<String>,
) -> AppResult<Response> {
    let path = state.media.resolve(&filename)?;
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|_| AppError::not_found(format!("Media '{}' not found", filename)))?;

    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    Ok((
        [
            (header::CONTENT_TYPE, mime.to_string()),
            (
                header::CACHE_CONTROL,
                "public, max-age=31536000, immutable".to_string(),
            ),
        ],
        bytes,
    )
        .into_response())
}
