//! # Storage Module
//!
//! Persistence collaborator for the salary ticker.
//!
//! The only persisted state is a single settings blob (schedule, display
//! preferences and recorded income history). The domain layer talks to it
//! through the [`SettingsStorage`] trait and never touches files directly.

pub mod connection;
pub mod settings_repository;
pub mod traits;

pub use connection::DataDirectory;
pub use settings_repository::SettingsRepository;
pub use traits::SettingsStorage;
