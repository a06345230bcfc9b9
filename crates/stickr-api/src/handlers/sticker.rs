//! Sticker handlers.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::request::UpdateColorRequest;
use crate::dto::response::{ApiResponse, ColorResponse, DeleteStickerResponse};
use crate::error::ApiError;
use crate::extractors::{ValidatedJson, parse_sticker_id};
use crate::state::AppState;

/// DELETE /api/stickers/{id}
///
/// Deleting a sticker that is already gone is not an error.
pub async fn delete_sticker(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DeleteStickerResponse>>, ApiError> {
    let id = parse_sticker_id(&id)?;
    let deleted = state.sticker_service.delete(id).await?;
    Ok(Json(ApiResponse::ok(DeleteStickerResponse { deleted })))
}

/// PUT /api/stickers/{id}/color
pub async fn update_color(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateColorRequest>,
) -> Result<Json<ApiResponse<ColorResponse>>, ApiError> {
    let id = parse_sticker_id(&id)?;
    let color = state
        .sticker_service
        .set_color(id, req.color_index)
        .await?;
    Ok(Json(ApiResponse::ok(ColorResponse::new(id, color))))
}
