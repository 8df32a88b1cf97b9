//! # Backend Module
//!
//! Contains all non-UI logic for the journal application. This backend:
//! - Uses synchronous operations (no async/await)
//! - Provides direct access to domain services
//! - Is optimized for desktop-only operation

use anyhow::Result;
use std::sync::Arc;

// Domain modules
pub mod domain;
pub mod storage;

// Re-export commonly used types
pub use storage::JsonConnection;

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub journal_service: domain::JournalService<JsonConnection>,
    pub export_service: domain::ExportService,
}

impl Backend {
    /// Create a new backend instance with all services, using the default
    /// data directory.
    pub fn new() -> Result<Self> {
        let connection = Arc::new(JsonConnection::new_default()?);
        Self::with_connection(connection)
    }

    /// Create a backend on top of an existing connection.
    pub fn with_connection(connection: Arc<JsonConnection>) -> Result<Self> {
        let journal_service = domain::JournalService::new(connection)?;
        let export_service = domain::ExportService::new();

        Ok(Backend {
            journal_service,
            export_service,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_backend_starts_with_empty_journal_in_fresh_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection = Arc::new(JsonConnection::new(temp_dir.path()).unwrap());

        let backend = Backend::with_connection(connection).unwrap();
        assert!(backend.journal_service.entries().is_empty());
    }
}
