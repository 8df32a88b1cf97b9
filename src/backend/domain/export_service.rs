//! Export service domain logic.
//!
//! Renders the journal as CSV and writes it to disk, including resolution of
//! the destination directory. The UI only handles presentation concerns.
//!
//! The CSV layout is pinned to the historical export format: a fixed header,
//! comma-joined fields with no quoting or escaping, rows joined by `\n` with
//! no trailing newline, and the fixed filename `catatan_keuangan.csv`. A
//! description containing a comma therefore shifts columns in that row; tools
//! reading these exports have always dealt with the format as-is.

use anyhow::Result;
use log::{error, info};
use std::fs;
use std::path::PathBuf;

use crate::backend::domain::models::entry::Entry;

/// Fixed name of the exported file.
pub const EXPORT_FILE_NAME: &str = "catatan_keuangan.csv";

const CSV_HEADER: &str = "Deskripsi,Jumlah,Tipe,Kategori,Waktu";

/// Outcome of a successful export.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub file_path: String,
    pub entry_count: usize,
}

/// Export service that handles all export-related business logic
#[derive(Clone)]
pub struct ExportService {
    // No internal state needed for now
}

impl ExportService {
    /// Create a new ExportService instance
    pub fn new() -> Self {
        Self {}
    }

    /// Render all entries as CSV content, in journal order.
    pub fn render_csv(&self, entries: &[Entry]) -> String {
        let mut csv_content = String::new();
        csv_content.push_str(CSV_HEADER);

        for entry in entries {
            let row = format!(
                "{},{},{},{},{}",
                entry.description,
                format_plain_amount(entry.amount),
                entry.kind.wire_word(),
                entry.category.as_deref().unwrap_or(""),
                entry.timestamp_display(),
            );
            csv_content.push('\n');
            csv_content.push_str(&row);
        }

        csv_content
    }

    /// Export entries to `catatan_keuangan.csv` in the given directory, or in
    /// the default location (Documents folder) when no path is given.
    pub fn export_to_path(&self, entries: &[Entry], custom_path: Option<&str>) -> Result<ExportOutcome> {
        info!("Exporting {} entries - custom_path: {:?}", entries.len(), custom_path);

        let csv_content = self.render_csv(entries);

        // Determine the export directory
        let export_dir = match custom_path {
            Some(custom_path) if !custom_path.trim().is_empty() => {
                // Basic path sanitization: remove quotes, trim whitespace, handle common issues
                PathBuf::from(self.sanitize_path(custom_path))
            }
            _ => default_export_directory()?,
        };

        let file_path = export_dir.join(EXPORT_FILE_NAME);

        // Ensure the directory exists
        if let Some(parent_dir) = file_path.parent() {
            if let Err(e) = fs::create_dir_all(parent_dir) {
                error!("Failed to create export directory {:?}: {}", parent_dir, e);
                return Err(anyhow::anyhow!("Failed to create export directory: {}", e));
            }
        }

        // Write the file
        match fs::write(&file_path, &csv_content) {
            Ok(_) => {
                let file_path_str = file_path.to_string_lossy().to_string();
                info!("Successfully exported {} entries to: {}", entries.len(), file_path_str);

                Ok(ExportOutcome {
                    file_path: file_path_str,
                    entry_count: entries.len(),
                })
            }
            Err(e) => {
                error!("Failed to write export file to {:?}: {}", file_path, e);
                Err(anyhow::anyhow!("Failed to write export file: {}", e))
            }
        }
    }

    /// Basic path sanitization to handle common user input issues
    fn sanitize_path(&self, path: &str) -> String {
        let mut cleaned = path.trim().to_string();

        // Remove surrounding quotes (single or double). A lone quote is not
        // a surrounding pair, so the strip needs at least two characters.
        if cleaned.len() >= 2
            && ((cleaned.starts_with('"') && cleaned.ends_with('"'))
                || (cleaned.starts_with('\'') && cleaned.ends_with('\'')))
        {
            cleaned = cleaned[1..cleaned.len() - 1].to_string();
        }

        // Trim again after quote removal
        cleaned = cleaned.trim().to_string();

        // Handle escaped spaces (common on some systems)
        cleaned = cleaned.replace("\\ ", " ");

        // Remove any trailing slashes/backslashes
        while cleaned.ends_with('/') || cleaned.ends_with('\\') {
            cleaned.pop();
        }

        // Handle tilde expansion for home directory
        if cleaned.starts_with('~') {
            if let Some(home) = dirs::home_dir() {
                if cleaned == "~" {
                    cleaned = home.to_string_lossy().to_string();
                } else if cleaned.starts_with("~/") || cleaned.starts_with("~\\") {
                    cleaned = home.join(&cleaned[2..]).to_string_lossy().to_string();
                }
            }
        }

        cleaned
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}

/// Documents folder, falling back to the home directory.
fn default_export_directory() -> Result<PathBuf> {
    if let Some(docs_dir) = dirs::document_dir() {
        return Ok(docs_dir);
    }
    dirs::home_dir().ok_or_else(|| {
        error!("Could not determine default export directory");
        anyhow::anyhow!("Failed to determine export directory")
    })
}

/// Amount the way the snapshot numbers print: no decimal point for whole
/// values, shortest representation otherwise. Also seeds the settings
/// inputs, so the text matches what was stored.
pub fn format_plain_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{}", amount as i64)
    } else {
        format!("{}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::entry::EntryKind;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn sample_entries() -> Vec<Entry> {
        vec![
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
                timestamp: Utc.with_ymd_and_hms(2026, 8, 2, 7, 30, 5).unwrap(),
            },
        ]
    }

    #[test]
    fn test_render_csv_empty_journal_is_header_only() {
        let service = ExportService::new();
        assert_eq!(service.render_csv(&[]), "Deskripsi,Jumlah,Tipe,Kategori,Waktu");
    }

    #[test]
    fn test_render_csv_rows_follow_journal_order() {
        let service = ExportService::new();
        let csv = service.render_csv(&sample_entries());

        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Deskripsi,Jumlah,Tipe,Kategori,Waktu");
        assert_eq!(lines[1], "Gaji,5000000,pemasukan,,1/8/2026, 09.00.00");
        assert_eq!(lines[2], "Beli kopi,15000,pengeluaran,Makan,2/8/2026, 07.30.05");
    }

    #[test]
    fn test_render_csv_has_no_trailing_newline() {
        let service = ExportService::new();
        let csv = service.render_csv(&sample_entries());
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_render_csv_does_not_quote_commas() {
        let service = ExportService::new();
        let entries = vec![Entry {
            description: "Kopi, roti".to_string(),
            amount: 20000.0,
            kind: EntryKind::Expense,
            category: Some("Makan".to_string()),
            timestamp: Utc.with_ymd_and_hms(2026, 8, 2, 7, 30, 5).unwrap(),
        }];

        let csv = service.render_csv(&entries);
        let row = csv.split('\n').nth(1).unwrap();
        // The legacy format never quoted; the comma passes through verbatim
        assert_eq!(row, "Kopi, roti,20000,pengeluaran,Makan,2/8/2026, 07.30.05");
        assert!(!row.contains('"'));
    }

    #[test]
    fn test_render_csv_keeps_fractional_amounts() {
        let service = ExportService::new();
        let entries = vec![Entry {
            description: "Jajan".to_string(),
            amount: 12500.5,
            kind: EntryKind::Expense,
            category: Some("Jajan & Pacar".to_string()),
            timestamp: Utc.with_ymd_and_hms(2026, 8, 2, 7, 30, 5).unwrap(),
        }];

        let csv = service.render_csv(&entries);
        assert!(csv.contains(",12500.5,"));
    }

    #[test]
    fn test_export_to_path_writes_fixed_filename() {
        let temp_dir = TempDir::new().unwrap();
        let service = ExportService::new();

        let outcome = service
            .export_to_path(&sample_entries(), Some(temp_dir.path().to_str().unwrap()))
            .unwrap();

        assert_eq!(outcome.entry_count, 2);
        let expected_path = temp_dir.path().join("catatan_keuangan.csv");
        assert!(expected_path.exists());
        assert!(outcome.file_path.ends_with("catatan_keuangan.csv"));

        let written = fs::read_to_string(expected_path).unwrap();
        assert_eq!(written, service.render_csv(&sample_entries()));
    }

    #[test]
    fn test_export_to_path_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("exports").join("2026");
        let service = ExportService::new();

        service
            .export_to_path(&sample_entries(), Some(nested.to_str().unwrap()))
            .unwrap();

        assert!(nested.join("catatan_keuangan.csv").exists());
    }

    #[test]
    fn test_sanitize_path() {
        let service = ExportService::new();

        // Test quote removal and tilde expansion
        let home_dir = dirs::home_dir().unwrap().to_string_lossy().to_string();
        let expected_documents = std::path::PathBuf::from(&home_dir)
            .join("Documents")
            .to_string_lossy()
            .to_string();

        assert_eq!(service.sanitize_path("\"~/Documents\""), expected_documents);
        assert_eq!(service.sanitize_path("'~/Documents'"), expected_documents);

        // Test space handling
        assert_eq!(service.sanitize_path("  /path/to/dir  "), "/path/to/dir");
        assert_eq!(service.sanitize_path("/path\\ to\\ dir"), "/path to dir");

        // Test trailing slash removal
        assert_eq!(service.sanitize_path("/path/to/dir/"), "/path/to/dir");
        assert_eq!(service.sanitize_path("/path/to/dir\\"), "/path/to/dir");
    }

    #[test]
    fn test_sanitize_path_keeps_lone_quote_verbatim() {
        let service = ExportService::new();

        // A single quote character starts and ends with itself; it must not
        // be treated as a surrounding pair
        assert_eq!(service.sanitize_path("\""), "\"");
        assert_eq!(service.sanitize_path("'"), "'");
        assert_eq!(service.sanitize_path("  '  "), "'");

        // Two quotes are a pair around an empty path
        assert_eq!(service.sanitize_path("\"\""), "");
    }

    #[test]
    fn test_export_to_path_accepts_quoted_directory() {
        let temp_dir = TempDir::new().unwrap();
        let quoted = format!("\"{}\"", temp_dir.path().display());
        let service = ExportService::new();

        let outcome = service.export_to_path(&sample_entries(), Some(&quoted)).unwrap();

        assert!(temp_dir.path().join("catatan_keuangan.csv").exists());
        assert_eq!(outcome.entry_count, 2);
    }

    #[test]
    fn test_format_plain_amount() {
        assert_eq!(format_plain_amount(0.0), "0");
        assert_eq!(format_plain_amount(15000.0), "15000");
        assert_eq!(format_plain_amount(5000000.0), "5000000");
        assert_eq!(format_plain_amount(12500.5), "12500.5");
        assert_eq!(format_plain_amount(0.25), "0.25");
    }
}
