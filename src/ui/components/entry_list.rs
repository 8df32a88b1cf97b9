//! # Entry List Component
//!
//! Renders the recorded entries as a table in insertion order. Each row
//! carries a colored cue in its first column, red for expenses and green for
//! income, the same colors the web version used for its list borders.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::backend::domain::models::entry::{Entry, EntryKind};
use crate::ui::components::styling::entry_accent;
use crate::ui::mappers::format_rupiah;

/// Render the entry table
pub fn render_entry_list(ui: &mut egui::Ui, entries: &[Entry]) {
    if entries.is_empty() {
        ui.label("Belum ada catatan.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(6.0)) // type cue
        .column(Column::remainder()) // Deskripsi
        .column(Column::exact(110.0)) // Jumlah
        .column(Column::exact(90.0)) // Kategori
        .column(Column::exact(140.0)) // Waktu
        .header(26.0, |mut header| {
            header.col(|_ui| {});
            header.col(|ui| {
                ui.label(egui::RichText::new("Deskripsi").strong());
            });
            header.col(|ui| {
                ui.label(egui::RichText::new("Jumlah").strong());
            });
            header.col(|ui| {
                ui.label(egui::RichText::new("Kategori").strong());
            });
            header.col(|ui| {
                ui.label(egui::RichText::new("Waktu").strong());
            });
        })
        .body(|mut body| {
            for entry in entries {
                body.row(34.0, |mut row| {
                    // Type cue column
                    row.col(|ui| {
                        let rect = ui.max_rect();
                        ui.painter()
                            .rect_filled(rect, egui::Rounding::same(2.0), entry_accent(entry.kind));
                    });

                    row.col(|ui| {
                        ui.label(&entry.description);
                    });

                    row.col(|ui| {
                        ui.colored_label(entry_accent(entry.kind), signed_amount(entry));
                    });

                    row.col(|ui| {
                        ui.label(entry.category.as_deref().unwrap_or(""));
                    });

                    row.col(|ui| {
                        ui.label(entry.timestamp_display());
                    });
                });
            }
        });
}

/// Signed rupiah text for a row, e.g. `-Rp 15.000` or `+Rp 5.000.000`.
fn signed_amount(entry: &Entry) -> String {
    let sign = match entry.kind {
        EntryKind::Expense => '-',
        EntryKind::Income => '+',
    };
    format!("{}Rp {}", sign, format_rupiah(entry.amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::entry::EntryKind;
    use chrono::{TimeZone, Utc};

    fn entry(kind: EntryKind, amount: f64) -> Entry {
        Entry {
            description: "Contoh".to_string(),
            amount,
            kind,
            category: None,
            timestamp: Utc.with_ymd_and_hms(2026, 8, 25, 7, 30, 5).unwrap(),
        }
    }

    #[test]
    fn test_signed_amount_prefixes_by_kind() {
        assert_eq!(signed_amount(&entry(EntryKind::Expense, 15000.0)), "-Rp 15.000");
        assert_eq!(signed_amount(&entry(EntryKind::Income, 5000000.0)), "+Rp 5.000.000");
    }
}
