//! # Entry Form Component
//!
//! The add-entry card: description, amount, type selector and, for expenses,
//! the category selector. Submission goes through the journal service, which
//! owns validation; this component only shapes the draft command and shows
//! the rejection reason when the service refuses it.

use eframe::egui;
use log::info;

use crate::backend::domain::commands::entries::AddEntryCommand;
use crate::backend::domain::models::category::EXPENSE_CATEGORIES;
use crate::backend::domain::models::entry::EntryKind;
use crate::ui::app_state::CatatanKeuanganApp;
use crate::ui::components::styling::card_frame;

impl CatatanKeuanganApp {
    /// Render the add-entry card
    pub fn render_entry_form_card(&mut self, ui: &mut egui::Ui) {
        card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.label(egui::RichText::new("Deskripsi").strong());
            ui.add(
                egui::TextEdit::singleline(&mut self.deskripsi_input)
                    .hint_text("Contoh: Beli kopi")
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(8.0);

            ui.label(egui::RichText::new("Jumlah (Rp)").strong());
            ui.add(
                egui::TextEdit::singleline(&mut self.jumlah_input)
                    .hint_text("10000")
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(8.0);

            ui.label(egui::RichText::new("Tipe").strong());
            let previous_kind = self.tipe_input;
            egui::ComboBox::from_id_source("tipe_selector")
                .width(ui.available_width())
                .selected_text(kind_label(self.tipe_input))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.tipe_input, EntryKind::Expense, "Pengeluaran");
                    ui.selectable_value(&mut self.tipe_input, EntryKind::Income, "Pemasukan");
                });
            if self.tipe_input != previous_kind {
                // Switching the type resets the category choice
                self.kategori_input.clear();
            }

            // The category selector only exists for expenses
            if self.tipe_input == EntryKind::Expense {
                ui.add_space(8.0);
                ui.label(egui::RichText::new("Kategori Pengeluaran").strong());
                let selected_label = EXPENSE_CATEGORIES
                    .iter()
                    .find(|option| option.value == self.kategori_input)
                    .map(|option| option.label)
                    .unwrap_or("-- Pilih Kategori --");
                egui::ComboBox::from_id_source("kategori_selector")
                    .width(ui.available_width())
                    .selected_text(selected_label)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut self.kategori_input,
                            String::new(),
                            "-- Pilih Kategori --",
                        );
                        for option in EXPENSE_CATEGORIES.iter() {
                            ui.selectable_value(
                                &mut self.kategori_input,
                                option.value.to_string(),
                                option.label,
                            );
                        }
                    });
            }

            ui.add_space(12.0);

            if ui.button("Tambah Catatan").clicked() {
                self.submit_entry_form();
            }
        });
    }

    /// Submit the current draft to the journal service
    fn submit_entry_form(&mut self) {
        self.clear_messages();

        let category = if self.kategori_input.is_empty() {
            None
        } else {
            Some(self.kategori_input.clone())
        };

        let command = AddEntryCommand {
            description: self.deskripsi_input.trim().to_string(),
            amount: self.jumlah_input.clone(),
            kind: self.tipe_input,
            category,
        };

        match self.backend.journal_service.add_entry(command) {
            Ok(entry) => {
                info!("Entry '{}' recorded", entry.description);
                self.success_message = Some("Catatan tersimpan!".to_string());
                self.reset_entry_form();
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
            }
        }
    }
}

fn kind_label(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Expense => "Pengeluaran",
        EntryKind::Income => "Pemasukan",
    }
}
