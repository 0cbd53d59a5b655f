use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::layout::{render, RenderedDocument};
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

pub const DEFAULT_TEMPLATE: &str = "professional";

#[derive(Deserialize)]
pub struct TemplateQuery {
    pub template: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    #[serde(default)]
    pub record: ResumeRecord,
    pub template: Option<String>,
}

/// GET /api/v1/resumes/:id/render?template=<id>
pub async fn handle_render_stored(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<TemplateQuery>,
) -> Result<Json<RenderedDocument>, AppError> {
    let record = state.store.fetch(&id).await?;
    let template = params.template.as_deref().unwrap_or(DEFAULT_TEMPLATE);
    Ok(Json(render(&record, template)))
}

/// POST /api/v1/render
///
/// Renders an inline record without persisting it.
pub async fn handle_render_inline(Json(req): Json<RenderRequest>) -> Json<RenderedDocument> {
    let template = req.template.as_deref().unwrap_or(DEFAULT_TEMPLATE);
    Json(render(&req.record, template))
}
