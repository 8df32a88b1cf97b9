//! Journal management service.
//!
//! Owns the canonical in-memory [`Journal`], applies validated mutations and
//! persists a full snapshot after each one. Persistence is an explicit step
//! inside every mutating operation, never a side effect of rendering, so the
//! UI can stay a pure projection of this service's state.

use anyhow::Result;
use chrono::Utc;
use log::{info, warn};
use std::sync::Arc;
use thiserror::Error;

use crate::backend::domain::commands::entries::AddEntryCommand;
use crate::backend::domain::models::entry::{Entry, EntryKind};
use crate::backend::domain::models::journal::Journal;
use crate::backend::storage::{Connection, SnapshotStorage};

/// Why an [`AddEntryCommand`] was rejected. Rejections leave the journal
/// observably unchanged and nothing is persisted.
#[derive(Debug, Error, PartialEq)]
pub enum JournalError {
    #[error("Deskripsi tidak boleh kosong")]
    EmptyDescription,
    #[error("Jumlah harus berupa angka")]
    InvalidAmount,
    #[error("Jumlah harus lebih dari nol")]
    NonPositiveAmount,
    #[error("Kategori pengeluaran harus dipilih")]
    MissingCategory,
}

/// Service owning the journal state and its persistence
pub struct JournalService<C: Connection> {
    journal: Journal,
    snapshot_repository: C::SnapshotRepository,
}

impl<C: Connection> JournalService<C> {
    /// Create the service, restoring the journal from the snapshot if one
    /// exists. A missing or unreadable snapshot starts an empty journal.
    pub fn new(connection: Arc<C>) -> Result<Self> {
        let snapshot_repository = connection.create_snapshot_repository();

        let journal = match snapshot_repository.load_snapshot()? {
            Some(journal) => {
                info!("Restored journal with {} entries from snapshot", journal.entries.len());
                journal
            }
            None => {
                info!("No usable snapshot found, starting with an empty journal");
                Journal::default()
            }
        };

        Ok(Self {
            journal,
            snapshot_repository,
        })
    }

    /// Record a new entry at the current time.
    ///
    /// Validation mirrors what the form promises the user: a description, a
    /// positive numeric amount, and a category when the entry is an expense.
    /// Income entries never carry a category, whatever the command says.
    pub fn add_entry(&mut self, command: AddEntryCommand) -> Result<Entry, JournalError> {
        if command.description.trim().is_empty() {
            return Err(JournalError::EmptyDescription);
        }

        let amount: f64 = command
            .amount
            .trim()
            .parse()
            .map_err(|_| JournalError::InvalidAmount)?;
        if !amount.is_finite() {
            return Err(JournalError::InvalidAmount);
        }
        if amount <= 0.0 {
            return Err(JournalError::NonPositiveAmount);
        }

        let category = match command.kind {
            EntryKind::Expense => match command.category {
                Some(ref category) if !category.trim().is_empty() => Some(category.clone()),
                _ => return Err(JournalError::MissingCategory),
            },
            EntryKind::Income => None,
        };

        let entry = Entry {
            description: command.description,
            amount,
            kind: command.kind,
            category,
            timestamp: Utc::now(),
        };

        self.journal.entries.push(entry.clone());
        info!(
            "Added {} entry '{}' for {}",
            entry.kind.wire_word(),
            entry.description,
            entry.amount
        );

        self.persist();
        Ok(entry)
    }

    /// Replace the monthly income figure and persist.
    pub fn set_monthly_income(&mut self, monthly_income: f64) {
        self.journal.monthly_income = monthly_income;
        self.persist();
    }

    /// Replace the savings figure and persist.
    pub fn set_savings(&mut self, savings: f64) {
        self.journal.savings = savings;
        self.persist();
    }

    /// Write the current journal to the snapshot file.
    pub fn save(&self) -> Result<()> {
        self.snapshot_repository.save_snapshot(&self.journal)
    }

    /// Snapshot after a mutation. A failed write keeps the in-memory state
    /// authoritative; the next mutation retries the snapshot.
    fn persist(&self) {
        if let Err(e) = self.save() {
            warn!("Failed to write journal snapshot: {}", e);
        }
    }

    /// The current journal state.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.journal.entries
    }
}
