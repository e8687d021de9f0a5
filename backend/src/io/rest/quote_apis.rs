//! # REST API for Motivational Quotes

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use shared::QuoteResponse;
use tracing::{error, info};

use crate::domain::quote_service::QuoteContext;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_quote))
}

/// A quote matching today's progress; never fails because of the generator
pub async fn get_quote(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/quote");

    let active = match state.settings_service.load().await {
        Ok(active) => active,
        Err(e) => {
            error!("Failed to load settings: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error loading settings").into_response();
        }
    };

    let stats = state
        .earnings_calculator
        .compute(&active.schedule, state.clock.now());
    let context = QuoteContext::from_stats(&stats, active.schedule.monthly_salary);
    let (quote, source) = state.quote_service.next_quote(&context).await;

    (StatusCode::OK, Json(QuoteResponse { quote, source })).into_response()
}
