//! # App State Module
//!
//! This module defines the central application state structure and
//! initialization logic for the journal app.
//!
//! ## Purpose:
//! The CatatanKeuanganApp struct holds all application state in a single
//! location: the backend connection, form input buffers, UI messages and
//! modal visibility. All domain data lives behind the backend; the fields
//! here are only what the widgets need between frames.

use log::info;

use crate::backend::domain::export_service::format_plain_amount;
use crate::backend::domain::models::entry::EntryKind;
use crate::backend::Backend;
use crate::ui::components::export_modal::ExportFormState;

/// Main application struct for the egui journal
pub struct CatatanKeuanganApp {
    pub backend: Backend,

    // Settings form state (monthly income / savings)
    pub gaji_input: String,
    pub tabungan_input: String,

    // Entry form state
    pub deskripsi_input: String,
    pub jumlah_input: String,
    pub tipe_input: EntryKind,
    /// Selected category value; empty string means the placeholder option.
    pub kategori_input: String,

    // UI state
    pub error_message: Option<String>,
    pub success_message: Option<String>,

    // Modal states
    pub show_export_modal: bool,
    pub export_form: ExportFormState,
}

impl CatatanKeuanganApp {
    /// Create a new CatatanKeuanganApp with the journal restored from disk
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("Initializing CatatanKeuanganApp");

        let backend = Backend::new()?;

        let journal = backend.journal_service.journal();
        let gaji_input = format_plain_amount(journal.monthly_income);
        let tabungan_input = format_plain_amount(journal.savings);

        Ok(Self {
            backend,

            gaji_input,
            tabungan_input,

            deskripsi_input: String::new(),
            jumlah_input: String::new(),
            tipe_input: EntryKind::Expense,
            kategori_input: String::new(),

            error_message: None,
            success_message: None,

            show_export_modal: false,
            export_form: ExportFormState::new(),
        })
    }

    /// Clear any error or success messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    /// Reset the entry form back to its initial draft
    pub fn reset_entry_form(&mut self) {
        self.deskripsi_input.clear();
        self.jumlah_input.clear();
        self.tipe_input = EntryKind::Expense;
        self.kategori_input.clear();
    }
}
