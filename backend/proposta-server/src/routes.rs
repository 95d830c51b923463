use crate::{
    ApiError, AppState, create_proposal, delete_proposal, get_employee, get_proposal, health,
    list_proposals, update_proposal,
};

use std::panic::Location;

use axum::{Router, http::Uri, routing::get};
use error_location::ErrorLocation;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Proposals
        .route("/api/v1/propostas", get(list_proposals).post(create_proposal))
        .route(
            "/api/v1/propostas/{id}",
            get(get_proposal)
                .put(update_proposal)
                .delete(delete_proposal),
        )
        // Employee lookup passthrough
        .route("/api/v1/propostas/funcionarios/{id}", get(get_employee))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .fallback(not_found)
        // Add shared state
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Unknown routes get the same error body as every other failure.
async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        message: format!("No route for {}", uri.path()),
        location: ErrorLocation::from(Location::caller()),
    }
}
