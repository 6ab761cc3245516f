use crate::{AppState, create_user, get_exercise_log, health, list_users, log_exercise, request_logging};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let landing_page = ServeFile::new(state.assets.index_page());
    let public_files = ServeDir::new(state.assets.public_path());

    Router::new()
        // Landing page
        .route_service("/", landing_page)
        // Users and their exercise logs
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/{id}/exercises", post(log_exercise))
        .route("/api/users/{id}/logs", get(get_exercise_log))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Public files answer both under /public and at the site root
        .nest_service("/public", public_files.clone())
        .fallback_service(public_files)
        // Add shared state
        .with_state(state)
        .layer(middleware::from_fn(request_logging::log_request))
        // CORS middleware (allow all origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
