//! Domain layer: business logic and rules for the journal.

pub mod commands;
pub mod export_service;
pub mod journal_service;
pub mod models;
pub mod report;

pub use export_service::{ExportOutcome, ExportService};
pub use journal_service::{JournalError, JournalService};
pub use report::{balance, expense_totals_by_category, CategoryTotal};
