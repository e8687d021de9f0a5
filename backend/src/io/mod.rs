//! # IO Module
//!
//! Adapter layer between the outside world and the domain.
//!
//! - **rest**: axum handlers that sample the clock, call the domain and map
//!   the results to the DTOs in the `shared` crate
//! - **gemini_client**: outbound HTTP client used as the quote generator
//!
//! Handlers hold no per-client state; the presentation layer polls the
//! stats endpoints at its own cadence.

pub mod gemini_client;
pub mod rest;

pub use gemini_client::GeminiQuoteGenerator;
