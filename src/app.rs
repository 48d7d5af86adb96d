// src/app.rs

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::handlers::auth::register;
use crate::handlers::health::health;
use crate::registration::services::RegistrationService;

/// Registration routes, nested under `/auth`
pub fn auth_routes(service: Arc<RegistrationService>) -> Router {
    Router::new()
        .route("/register", post(register))
        .with_state(service)
}

/// Builds the complete application
pub fn build_router(service: Arc<RegistrationService>) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/auth", auth_routes(service))
        // Global tracing middleware
        .layer(TraceLayer::new_for_http())
}
