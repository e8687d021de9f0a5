//! # Settings Repository
//!
//! File-backed storage for the settings blob, kept as a single JSON file
//! at the root of the data directory:
//!
//! ```text
//! <data_dir>/
//! └── mm_settings.json
//! ```
//!
//! Writes go to a temp file first and are renamed into place, so a crash
//! mid-write never leaves a truncated blob behind. Writes and deletes are
//! serialized through a lock shared by all clones of the repository, since
//! every write goes through the same temp path.

use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::connection::DataDirectory;
use super::traits::SettingsStorage;

/// Fixed key the settings blob is stored under
pub const SETTINGS_KEY: &str = "mm_settings";

#[derive(Debug, Clone)]
pub struct SettingsRepository {
    data_directory: DataDirectory,
    write_lock: Arc<Mutex<()>>,
}

impl SettingsRepository {
    pub fn new(data_directory: DataDirectory) -> Self {
        Self {
            data_directory,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    fn settings_path(&self) -> PathBuf {
        self.data_directory
            .base_directory()
            .join(format!("{}.json", SETTINGS_KEY))
    }
}

#[async_trait]
impl SettingsStorage for SettingsRepository {
    async fn load_blob(&self) -> Result<Option<String>> {
        let path = self.settings_path();
        match fs::read_to_string(&path).await {
            Ok(blob) => {
                debug!("Loaded settings blob from {:?}", path);
                Ok(Some(blob))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings blob at {:?}", path);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn save_blob(&self, blob: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let path = self.settings_path();
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, blob).await?;
        fs::rename(&temp_path, &path).await?;
        debug!("Saved settings blob to {:?}", path);
        Ok(())
    }

    async fn delete_blob(&self) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let path = self.settings_path();
        match fs::remove_file(&path).await {
            Ok(()) => {
                info!("Deleted settings blob {:?}", path);
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
