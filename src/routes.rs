//! HTTP router assembly.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, state::AppState};

/// Build the application router with tracing and CORS layers applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        // Dashboard routes
        .route(
            "/api/v1/profile",
            get(handlers::profile::get_profile).post(handlers::profile::submit_profile),
        )
        .route(
            "/api/v1/profile/headline",
            post(handlers::profile::regenerate_headline),
        )
        // Business listing routes
        .route(
            "/api/v1/businesses/recent",
            get(handlers::businesses::list_recent),
        )
        .route(
            "/api/v1/businesses/{id}/headlines",
            get(handlers::businesses::list_headlines),
        )
        .route(
            "/api/v1/notifications",
            get(handlers::notifications::drain_notifications),
        )
        .layer(TraceLayer::new_for_http())
        // The dashboard is served from a different origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}
