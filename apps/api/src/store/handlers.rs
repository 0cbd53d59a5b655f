use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::state::AppState;
use crate::store::SavedDocument;

/// POST /api/v1/resumes
pub async fn handle_save_resume(
    State(state): State<AppState>,
    Json(record): Json<ResumeRecord>,
) -> Result<Json<SavedDocument>, AppError> {
    let saved = state.store.save(&record).await?;
    Ok(Json(saved))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResumeRecord>, AppError> {
    let record = state.store.fetch(&id).await?;
    Ok(Json(record))
}
