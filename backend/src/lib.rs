//! # Salary Ticker Backend
//!
//! Real-time salary ticker: shows how much of today's pay has been earned
//! so far, second by second, plus month-to-date and year-to-date totals.
//!
//! ## Architecture
//!
//! ```text
//! Presentation (polls /api every ~100 ms)
//!     ↓
//! IO Layer (REST handlers, mappers, outbound quote client)
//!     ↓
//! Domain Layer (calculation core, settings and quote services)
//!     ↓
//! Storage Layer (settings blob on disk)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{http::Method, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{
    Clock, EarningsCalculator, PeriodAggregator, QuoteService, SettingsService, SystemClock,
};
use crate::io::GeminiQuoteGenerator;
use crate::storage::{DataDirectory, SettingsRepository};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub settings_service: SettingsService,
    pub earnings_calculator: EarningsCalculator,
    pub period_aggregator: PeriodAggregator,
    pub quote_service: QuoteService,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Assemble the state from a settings store and a clock
    pub fn new(
        settings_service: SettingsService,
        quote_service: QuoteService,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            settings_service,
            earnings_calculator: EarningsCalculator::new(),
            period_aggregator: PeriodAggregator::new(),
            quote_service,
            clock,
        }
    }
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up data directory at {}", config.data_dir.display());
    let data_directory = DataDirectory::new(&config.data_dir)?;
    let settings_service = SettingsService::new(Arc::new(SettingsRepository::new(data_directory)));

    let quote_service = match &config.api_key {
        Some(key) => QuoteService::with_generator(Arc::new(GeminiQuoteGenerator::new(
            key.clone(),
            config.quote_timeout,
        )?)),
        None => QuoteService::new(),
    };
    if quote_service.has_generator() {
        info!("Quote generation enabled (timeout {:?})", config.quote_timeout);
    } else {
        info!("No API key configured, serving quotes from the static pool");
    }

    info!("Setting up application state");
    Ok(AppState::new(settings_service, quote_service, Arc::new(SystemClock)))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.clone())
        .allow_methods([Method::GET, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .nest("/api", io::rest::router())
        .layer(cors)
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    fn config_for(temp_dir: &TempDir, api_key: Option<&str>) -> AppConfig {
        AppConfig {
            data_dir: temp_dir.path().join("data"),
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            cors_origin: "http://localhost:8080".parse().unwrap(),
            api_key: api_key.map(str::to_string),
            quote_timeout: Duration::from_secs(1),
        }
    }

    #[test]
    fn test_initialize_without_api_key_uses_static_quotes() {
        let temp_dir = TempDir::new().unwrap();
        let state = initialize_backend(&config_for(&temp_dir, None)).unwrap();
        assert!(!state.quote_service.has_generator());
        assert!(temp_dir.path().join("data").is_dir());
    }

    #[test]
    fn test_initialize_with_api_key_enables_generator() {
        let temp_dir = TempDir::new().unwrap();
        let state = initialize_backend(&config_for(&temp_dir, Some("key"))).unwrap();
        assert!(state.quote_service.has_generator());
    }
}
