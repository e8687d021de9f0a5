//! # Storage Traits
//!
//! Storage abstraction so the settings blob can live anywhere (a file, a
//! browser key-value store behind an adapter, memory in tests).

use anyhow::Result;
use async_trait::async_trait;

/// Raw access to the single persisted settings blob.
///
/// Implementations store and return the blob verbatim; parsing and
/// validation belong to the domain layer.
#[async_trait]
pub trait SettingsStorage: Send + Sync {
    /// Load the stored blob, `None` if nothing has been saved yet
    async fn load_blob(&self) -> Result<Option<String>>;

    /// Replace the stored blob
    async fn save_blob(&self, blob: &str) -> Result<()>;

    /// Remove the stored blob. Returns true if something was deleted.
    async fn delete_blob(&self) -> Result<bool>;
}
