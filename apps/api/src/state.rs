use std::sync::Arc;

use crate::config::Config;
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable document store. Redis when REDIS_URL is set, in-memory otherwise.
    pub store: Arc<dyn DocumentStore>,
    pub config: Config,
}
