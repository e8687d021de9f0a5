//! # REST API for Earnings Stats
//!
//! Polled by the dashboard. Every handler samples the clock once and feeds
//! that instant to the calculation core, so all figures in one response
//! agree with each other.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tracing::{debug, error};

use crate::domain::earnings_calculator::daily_target;
use crate::io::rest::mappers::stats_mapper::StatsMapper;
use crate::AppState;

/// Create a router for stats related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/work", get(get_work_stats))
        .route("/aggregate", get(get_aggregate_stats))
        .route("/weekly-trend", get(get_weekly_trend))
}

/// Today's running earnings
pub async fn get_work_stats(State(state): State<AppState>) -> impl IntoResponse {
    debug!("GET /api/stats/work");

    let active = match state.settings_service.load().await {
        Ok(active) => active,
        Err(e) => {
            error!("Failed to load settings: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error loading settings").into_response();
        }
    };

    let now = state.clock.now();
    let stats = state.earnings_calculator.compute(&active.schedule, now);
    let response = StatsMapper::to_work_stats_response(
        stats,
        state.earnings_calculator.hourly_rate(&active.schedule),
        daily_target(&active.schedule),
        now,
    );
    (StatusCode::OK, Json(response)).into_response()
}

/// Today, month-to-date and year-to-date totals
pub async fn get_aggregate_stats(State(state): State<AppState>) -> impl IntoResponse {
    debug!("GET /api/stats/aggregate");

    let active = match state.settings_service.load().await {
        Ok(active) => active,
        Err(e) => {
            error!("Failed to load settings: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error loading settings").into_response();
        }
    };

    let now = state.clock.now();
    let stats = state
        .period_aggregator
        .aggregate(&active.schedule, now, &active.history);
    let response = StatsMapper::to_aggregate_response(stats, now);
    (StatusCode::OK, Json(response)).into_response()
}

/// Projected income per weekday, Monday first
pub async fn get_weekly_trend(State(state): State<AppState>) -> impl IntoResponse {
    debug!("GET /api/stats/weekly-trend");

    let active = match state.settings_service.load().await {
        Ok(active) => active,
        Err(e) => {
            error!("Failed to load settings: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error loading settings").into_response();
        }
    };

    let points = state.period_aggregator.weekly_trend(&active.schedule);
    let response = StatsMapper::to_weekly_trend_response(points, daily_target(&active.schedule));
    (StatusCode::OK, Json(response)).into_response()
}
