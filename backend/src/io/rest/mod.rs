//! # REST API Interface Layer
//!
//! HTTP endpoints under `/api`. Each handler:
//! - reads the clock at most once per request
//! - loads the active settings through the settings service
//! - calls the pure calculation core
//! - maps the result to a DTO and logs failures before answering
//!
//! Domain errors are translated to status codes here and nowhere else.

pub mod mappers;
pub mod quote_apis;
pub mod settings_apis;
pub mod stats_apis;

use axum::{routing::get, Router};

use crate::AppState;

/// Every `/api` route
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/stats", stats_apis::router())
        .nest("/settings", settings_apis::router())
        .nest("/quote", quote_apis::router())
        .route("/health", get(health))
}

/// Liveness probe
pub async fn health() -> &'static str {
    "ok"
}
