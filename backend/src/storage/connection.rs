use anyhow::{anyhow, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Name of the directory created under the user's home when no data
/// directory is configured
const DEFAULT_DIRECTORY_NAME: &str = ".salary-ticker";

/// Directory holding everything the app persists
#[derive(Debug, Clone)]
pub struct DataDirectory {
    base_directory: PathBuf,
}

impl DataDirectory {
    /// Use `base_directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// `~/.salary-ticker`
    pub fn default_path() -> Result<PathBuf> {
        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow!("Could not determine home directory"))?;
        Ok(PathBuf::from(home_dir).join(DEFAULT_DIRECTORY_NAME))
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        assert!(!nested.exists());

        let data_dir = DataDirectory::new(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(data_dir.base_directory(), nested.as_path());
    }
}
