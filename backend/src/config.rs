//! Runtime configuration read from the environment at startup.

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::storage::DataDirectory;

pub const DATA_DIR_VAR: &str = "SALARY_TICKER_DATA_DIR";
pub const BIND_VAR: &str = "SALARY_TICKER_BIND";
pub const CORS_ORIGIN_VAR: &str = "SALARY_TICKER_CORS_ORIGIN";
pub const QUOTE_TIMEOUT_VAR: &str = "SALARY_TICKER_QUOTE_TIMEOUT_SECS";
/// Checked in this order
pub const API_KEY_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

const DEFAULT_BIND: &str = "127.0.0.1:3000";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";
const DEFAULT_QUOTE_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    /// Quote generation is disabled without a key
    pub api_key: Option<String>,
    pub quote_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let data_dir = match value(DATA_DIR_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => DataDirectory::default_path()?,
        };

        let bind = value(BIND_VAR).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("{BIND_VAR} is not a socket address: {bind}"))?;

        let origin = value(CORS_ORIGIN_VAR).unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());
        let cors_origin = origin
            .trim()
            .parse::<HeaderValue>()
            .with_context(|| format!("{CORS_ORIGIN_VAR} is not a valid origin: {origin}"))?;

        let api_key = API_KEY_VARS.iter().find_map(|name| value(*name));

        let quote_timeout = match value(QUOTE_TIMEOUT_VAR) {
            Some(secs) => secs.trim().parse::<u64>().with_context(|| {
                format!("{QUOTE_TIMEOUT_VAR} is not a number of seconds: {secs}")
            })?,
            None => DEFAULT_QUOTE_TIMEOUT_SECS,
        };

        Ok(Self {
            data_dir,
            bind_addr,
            cors_origin,
            api_key,
            quote_timeout: Duration::from_secs(quote_timeout),
        })
    }
}
