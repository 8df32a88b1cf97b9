//! # JSON Snapshot Repository
//!
//! This module provides file-based journal storage using a single JSON file
//! `catatan_keuangan.json` at the root of the data directory.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! └── catatan_keuangan.json    ← This module manages this file
//! ```
//!
//! ## JSON Format
//!
//! ```json
//! {
//!   "catatan": [
//!     {
//!       "deskripsi": "Beli kopi",
//!       "jumlah": 15000,
//!       "tipe": "pengeluaran",
//!       "kategori": "Makan",
//!       "waktu": "2026-08-25T07:30:05.000Z"
//!     }
//!   ],
//!   "totalGaji": 9000000,
//!   "tabungan": 11000000
//! }
//! ```
//!
//! ## Features
//!
//! - Single snapshot file holding the whole journal
//! - Full-replace writes via temp file and rename
//! - Unreadable snapshots are reported, not overwritten

use anyhow::Result;
use log::{debug, info, warn};
use std::fs;
use std::path::PathBuf;

use super::connection::JsonConnection;
use crate::backend::domain::models::journal::Journal;
use crate::backend::storage::traits::SnapshotStorage;

/// JSON-based snapshot repository for the journal
#[derive(Clone)]
pub struct JsonSnapshotRepository {
    connection: JsonConnection,
}

impl JsonSnapshotRepository {
    /// Create a new snapshot repository
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    /// Get the snapshot file path
    fn get_snapshot_path(&self) -> PathBuf {
        self.connection.snapshot_file_path()
    }
}

impl SnapshotStorage for JsonSnapshotRepository {
    fn load_snapshot(&self) -> Result<Option<Journal>> {
        let snapshot_path = self.get_snapshot_path();

        if !snapshot_path.exists() {
            debug!("No snapshot file at {:?}", snapshot_path);
            return Ok(None);
        }

        let json_content = fs::read_to_string(&snapshot_path)?;
        match serde_json::from_str::<Journal>(&json_content) {
            Ok(journal) => {
                debug!("Loaded snapshot from {:?}", snapshot_path);
                Ok(Some(journal))
            }
            Err(e) => {
                // Start fresh; the broken file is left in place until the
                // next save replaces it.
                warn!("Snapshot at {:?} is unreadable ({}), starting fresh", snapshot_path, e);
                Ok(None)
            }
        }
    }

    fn save_snapshot(&self, journal: &Journal) -> Result<()> {
        let snapshot_path = self.get_snapshot_path();
        let base_dir = self.connection.base_directory();

        // Ensure base directory exists
        if !base_dir.exists() {
            fs::create_dir_all(&base_dir)?;
            info!("Created base data directory: {:?}", base_dir);
        }

        let json_content = serde_json::to_string(journal)?;

        // Use atomic write pattern: write to temp file, then rename
        let temp_path = snapshot_path.with_extension("tmp");
        fs::write(&temp_path, json_content)?;
        fs::rename(&temp_path, &snapshot_path)?;

        debug!("Saved snapshot to {:?}", snapshot_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::entry::{Entry, EntryKind};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn setup_test_repo() -> (JsonSnapshotRepository, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection = JsonConnection::new(temp_dir.path()).expect("Failed to create connection");
        let repo = JsonSnapshotRepository::new(connection);

        (repo, temp_dir)
    }

    fn sample_journal() -> Journal {
        Journal {
            entries: vec![
                Entry {
                    description: "Gaji".to_string(),
                    amount: 5000000.0,
                    kind: EntryKind::Income,
                    category: None,
                    timestamp: Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap(),
                },
                Entry {
                    description: "Beli kopi".to_string(),
                    amount: 15000.0,
                    kind: EntryKind::Expense,
                    category: Some("Makan".to_string()),
                    timestamp: Utc.with_ymd_and_hms(2026, 8, 2, 7, 30, 0).unwrap(),
                },
            ],
            monthly_income: 9000000.0,
            savings: 11000000.0,
        }
    }

    #[test]
    fn test_load_snapshot_returns_none_when_file_missing() {
        let (repo, _temp_dir) = setup_test_repo();

        let loaded = repo.load_snapshot().unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (repo, _temp_dir) = setup_test_repo();
        let journal = sample_journal();

        repo.save_snapshot(&journal).unwrap();

        let loaded = repo.load_snapshot().unwrap().expect("snapshot should exist");
        assert_eq!(loaded, journal);
    }

    #[test]
    fn test_save_replaces_previous_snapshot() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.save_snapshot(&sample_journal()).unwrap();

        let mut updated = sample_journal();
        updated.savings = 12000000.0;
        updated.entries.pop();
        repo.save_snapshot(&updated).unwrap();

        let loaded = repo.load_snapshot().unwrap().unwrap();
        assert_eq!(loaded, updated);
        assert_eq!(loaded.entries.len(), 1);
    }

    #[test]
    fn test_load_accepts_legacy_browser_snapshot() {
        let (repo, temp_dir) = setup_test_repo();

        // Verbatim shape of a snapshot written by the original web version
        let legacy = r#"{"catatan":[{"deskripsi":"Gaji","jumlah":5000000,"tipe":"pemasukan","kategori":"","waktu":"2025-03-01T02:15:30.500Z"},{"deskripsi":"Naik bus","jumlah":5000,"tipe":"pengeluaran","kategori":"Transportasi","waktu":"2025-03-02T01:00:00.000Z"}],"totalGaji":9000000,"tabungan":11000000}"#;
        fs::write(temp_dir.path().join("catatan_keuangan.json"), legacy).unwrap();

        let journal = repo.load_snapshot().unwrap().expect("snapshot should parse");
        assert_eq!(journal.entries.len(), 2);
        assert_eq!(journal.entries[0].kind, EntryKind::Income);
        assert_eq!(journal.entries[0].category, None);
        assert_eq!(journal.entries[1].category, Some("Transportasi".to_string()));
        assert_eq!(journal.monthly_income, 9000000.0);
        assert_eq!(journal.savings, 11000000.0);
    }

    #[test]
    fn test_load_malformed_snapshot_starts_fresh_without_touching_file() {
        let (repo, temp_dir) = setup_test_repo();

        let snapshot_path = temp_dir.path().join("catatan_keuangan.json");
        fs::write(&snapshot_path, "{ not valid json").unwrap();

        let loaded = repo.load_snapshot().unwrap();
        assert!(loaded.is_none());

        // The broken file is untouched until the next save
        let content = fs::read_to_string(&snapshot_path).unwrap();
        assert_eq!(content, "{ not valid json");
    }

    #[test]
    fn test_snapshot_persists_across_repository_instances() {
        let (repo, temp_dir) = setup_test_repo();
        repo.save_snapshot(&sample_journal()).unwrap();

        // Simulate an app restart with a fresh connection
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        let repo2 = JsonSnapshotRepository::new(connection);

        let loaded = repo2.load_snapshot().unwrap().unwrap();
        assert_eq!(loaded, sample_journal());
    }
}
