use anyhow::Result;
use log::{error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::backend::storage::traits::Connection;

/// Name of the snapshot file inside the data directory.
pub const SNAPSHOT_FILE_NAME: &str = "catatan_keuangan.json";

/// Pointer file that redirects the data directory somewhere else.
const REDIRECT_FILE_NAME: &str = ".catatan_redirect";

/// JsonConnection manages the data directory that holds the snapshot file
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: Arc<Mutex<PathBuf>>,
}

impl JsonConnection {
    /// Create a new JSON connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: Arc::new(Mutex::new(base_path)),
        })
    }

    /// Create a new JSON connection in the default data directory.
    /// This uses the platform data dir, but checks for a redirect file first.
    pub fn new_default() -> Result<Self> {
        let default_data_dir = Self::default_data_directory()?;

        // Check for redirect file in the default location
        let redirect_file = default_data_dir.join(REDIRECT_FILE_NAME);

        let actual_data_dir = if redirect_file.exists() {
            // Read the redirect file to get the actual directory
            match fs::read_to_string(&redirect_file) {
                Ok(redirected_path) => {
                    let redirected_path = redirected_path.trim();
                    let path = PathBuf::from(redirected_path);

                    if path.exists() {
                        info!("Found redirect file, using data directory: {}", path.display());
                        path
                    } else {
                        warn!(
                            "Redirect file points to non-existent directory: {}. Using default.",
                            redirected_path
                        );
                        default_data_dir
                    }
                }
                Err(e) => {
                    error!("Failed to read redirect file: {}. Using default directory.", e);
                    default_data_dir
                }
            }
        } else {
            info!(
                "No redirect file found, using default data directory: {}",
                default_data_dir.display()
            );
            default_data_dir
        };

        Self::new(actual_data_dir)
    }

    /// Get the file path of the snapshot inside the data directory
    pub fn snapshot_file_path(&self) -> PathBuf {
        let base_dir = self.base_directory.lock().unwrap();
        base_dir.join(SNAPSHOT_FILE_NAME)
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> PathBuf {
        let base_dir = self.base_directory.lock().unwrap();
        base_dir.clone()
    }

    /// Get the default data directory path
    fn default_data_directory() -> Result<PathBuf> {
        if let Some(data_dir) = dirs::data_dir() {
            return Ok(data_dir.join("catatan-keuangan"));
        }

        // Fall back to a dot directory in the home directory
        let home_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(home_dir.join(".catatan-keuangan"))
    }
}

impl Connection for JsonConnection {
    type SnapshotRepository = super::snapshot_repository::JsonSnapshotRepository;

    fn create_snapshot_repository(&self) -> Self::SnapshotRepository {
        super::snapshot_repository::JsonSnapshotRepository::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_creates_missing_base_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base = temp_dir.path().join("nested").join("data");

        let connection = JsonConnection::new(&base).unwrap();

        assert!(base.exists());
        assert_eq!(connection.base_directory(), base);
    }

    #[test]
    fn test_snapshot_file_path_is_inside_base_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection = JsonConnection::new(temp_dir.path()).unwrap();

        let path = connection.snapshot_file_path();
        assert_eq!(path, temp_dir.path().join(SNAPSHOT_FILE_NAME));
    }

    #[test]
    fn test_clone_shares_base_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        let cloned = connection.clone();

        assert_eq!(connection.base_directory(), cloned.base_directory());
    }
}
