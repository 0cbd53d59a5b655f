pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::layout::handlers as layout_handlers;
use crate::state::AppState;
use crate::store::handlers as store_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume store API
        .route("/api/v1/resumes", post(store_handlers::handle_save_resume))
        .route(
            "/api/v1/resumes/:id",
            get(store_handlers::handle_get_resume),
        )
        // Render API
        .route(
            "/api/v1/resumes/:id/render",
            get(layout_handlers::handle_render_stored),
        )
        .route(
            "/api/v1/render",
            post(layout_handlers::handle_render_inline),
        )
        .with_state(state)
}
