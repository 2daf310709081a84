pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ai::handlers as ai_handlers;
use crate::catalog::handlers as catalog_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/v1/creators", get(catalog_handlers::handle_list_creators))
        .route(
            "/api/v1/creators/:id/analytics",
            get(catalog_handlers::handle_creator_analytics),
        )
        .route(
            "/api/v1/dashboard/overview",
            get(catalog_handlers::handle_dashboard_overview),
        )
        // AI services
        .route(
            "/api/v1/content/generate",
            post(ai_handlers::handle_generate_content),
        )
        .route(
            "/api/v1/matching/brand-creator",
            post(ai_handlers::handle_match_brand_creators),
        )
        .route(
            "/api/v1/risk/content-check",
            post(ai_handlers::handle_check_risk),
        )
        .route("/api/v1/ai/status", get(ai_handlers::handle_ai_status))
        .with_state(state)
}
