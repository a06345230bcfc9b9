//! Folder handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use stickr_core::types::ColorIndex;
use stickr_entity::folder::Folder;
use stickr_service::{FolderDeletion, RenameOutcome};

use crate::dto::request::{CreateStickerRequest, UpdateFolderRequest};
use crate::dto::response::{ApiResponse, FolderResponse, StickerResponse};
use crate::error::ApiError;
use crate::extractors::{ValidatedJson, parse_folder_id};
use crate::state::AppState;

fn folder_response(state: &AppState, folder: Folder) -> FolderResponse {
    let share_url = state.folder_service.share_url(&folder.id);
    FolderResponse::new(folder, share_url)
}

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<FolderResponse>>), ApiError> {
    let folder = state.folder_service.create_random().await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(folder_response(&state, folder))),
    ))
}

/// GET /api/folders/{id}
///
/// Creates the folder on first access.
pub async fn get_folder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<FolderResponse>>, ApiError> {
    let id = parse_folder_id(&id)?;
    let folder = state.folder_service.get_or_create(&id).await?;
    Ok(Json(ApiResponse::ok(folder_response(&state, folder))))
}

/// PUT /api/folders/{id}
pub async fn update_folder(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateFolderRequest>,
) -> Result<Json<ApiResponse<FolderResponse>>, ApiError> {
    let id = parse_folder_id(&id)?;
    let mut folder = state.folder_service.find(&id).await?;

    if let Some(name) = req.name.as_deref() {
        if let RenameOutcome::Renamed(renamed) =
            state.folder_service.apply_rename(&folder, name).await?
        {
            folder = renamed;
        }
    }

    if let Some(dark_mode) = req.dark_mode {
        if dark_mode != folder.dark_mode {
            folder = state
                .folder_service
                .set_display_mode(&id, dark_mode)
                .await?;
        }
    }

    Ok(Json(ApiResponse::ok(folder_response(&state, folder))))
}

/// DELETE /api/folders/{id}
///
/// Answers 200 with an orphan outcome when only the stickers could be
/// removed.
pub async fn delete_folder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<FolderDeletion>>, ApiError> {
    let id = parse_folder_id(&id)?;
    let outcome = state.folder_service.delete(&id).await?;
    Ok(Json(ApiResponse::ok(outcome)))
}

/// GET /api/folders/{id}/stickers
pub async fn list_stickers(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Vec<StickerResponse>>>, ApiError> {
    let id = parse_folder_id(&id)?;
    let stickers = state.sticker_service.list(&id).await?;
    Ok(Json(ApiResponse::ok(
        stickers.into_iter().map(StickerResponse::from).collect(),
    )))
}

/// POST /api/folders/{id}/stickers
pub async fn create_sticker(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<CreateStickerRequest>,
) -> Result<(StatusCode, Json<ApiResponse<StickerResponse>>), ApiError> {
    let id = parse_folder_id(&id)?;
    let color = ColorIndex::from_raw(req.color_index.unwrap_or(0));
    let sticker = state
        .sticker_service
        .create(&id, &req.content, color)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(StickerResponse::from(sticker))),
    ))
}
