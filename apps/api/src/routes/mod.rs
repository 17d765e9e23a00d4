pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/features", get(handlers::handle_list_features))
        .route(
            "/api/v1/tools/:id/analyze",
            post(handlers::handle_analyze),
        )
        .route(
            "/api/v1/integrations/linkedin/profile",
            get(handlers::handle_linkedin_profile),
        )
        .with_state(state)
}
