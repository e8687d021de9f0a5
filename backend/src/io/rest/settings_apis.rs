//! # REST API for Settings
//!
//! Read, replace and reset the persisted settings blob.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use shared::UserSettings;
use tracing::{error, info, warn};

use crate::domain::settings_service::SettingsError;
use crate::io::rest::mappers::settings_mapper::SettingsMapper;
use crate::AppState;

/// Create a router for settings related APIs
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(get_settings)
            .put(update_settings)
            .delete(reset_settings),
    )
}

/// Current settings, defaults if nothing usable is stored
pub async fn get_settings(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/settings");

    match state.settings_service.load().await {
        Ok(active) => {
            let response = SettingsMapper::to_settings_response(active);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to load settings: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error loading settings").into_response()
        }
    }
}

/// Validate and store new settings.
///
/// Bodies that are not well-typed settings JSON are rejected with 400, the
/// same as settings that parse but fail validation.
pub async fn update_settings(
    State(state): State<AppState>,
    payload: Result<Json<UserSettings>, JsonRejection>,
) -> impl IntoResponse {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected settings body: {}", rejection.body_text());
            return (StatusCode::BAD_REQUEST, rejection.body_text()).into_response();
        }
    };
    info!("PUT /api/settings - request: {:?}", request);

    match state.settings_service.save(request).await {
        Ok(active) => {
            let response = SettingsMapper::to_settings_response(active);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => match e.downcast_ref::<SettingsError>() {
            Some(invalid) => {
                warn!("Rejected settings: {}", invalid);
                (StatusCode::BAD_REQUEST, invalid.to_string()).into_response()
            }
            None => {
                error!("Failed to save settings: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Error saving settings").into_response()
            }
        },
    }
}

/// Drop stored settings and answer with the defaults
pub async fn reset_settings(State(state): State<AppState>) -> impl IntoResponse {
    info!("DELETE /api/settings");

    match state.settings_service.reset().await {
        Ok(active) => {
            let response = SettingsMapper::to_settings_response(active);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to reset settings: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error resetting settings").into_response()
        }
    }
}
