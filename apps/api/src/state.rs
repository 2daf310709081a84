use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ModelGateway;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide model gateway — initialized once in `main`, read-only
    /// thereafter. Unavailable means every AI endpoint serves mock data.
    pub gateway: Arc<ModelGateway>,
    pub config: Config,
}
