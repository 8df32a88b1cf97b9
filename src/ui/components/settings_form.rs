//! # Settings Form Component
//!
//! Renders the card with the two standing figures of the journal: the
//! monthly income and the current savings.
//!
//! ## Behavior:
//! Each field dispatches its setter as soon as the edited text parses as a
//! number, so the figures are persisted while the user types. Text that does
//! not parse (a cleared field, stray characters) leaves the stored value
//! alone until the input becomes a number again.

use eframe::egui;

use crate::ui::app_state::CatatanKeuanganApp;
use crate::ui::components::styling::card_frame;

impl CatatanKeuanganApp {
    /// Render the monthly income / savings card
    pub fn render_settings_card(&mut self, ui: &mut egui::Ui) {
        card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.label(egui::RichText::new("Total Gaji (per bulan)").strong());
            let gaji_response = ui.add(
                egui::TextEdit::singleline(&mut self.gaji_input)
                    .hint_text("Contoh: 9000000")
                    .desired_width(f32::INFINITY),
            );
            if gaji_response.changed() {
                if let Some(value) = parse_scalar(&self.gaji_input) {
                    self.backend.journal_service.set_monthly_income(value);
                }
            }

            ui.add_space(8.0);

            ui.label(egui::RichText::new("Tabungan Saat Ini").strong());
            let tabungan_response = ui.add(
                egui::TextEdit::singleline(&mut self.tabungan_input)
                    .hint_text("Contoh: 11000000")
                    .desired_width(f32::INFINITY),
            );
            if tabungan_response.changed() {
                if let Some(value) = parse_scalar(&self.tabungan_input) {
                    self.backend.journal_service.set_savings(value);
                }
            }
        });
    }
}

/// Parse a settings field. `None` keeps the stored value untouched.
fn parse_scalar(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalar_accepts_numbers() {
        assert_eq!(parse_scalar("9000000"), Some(9000000.0));
        assert_eq!(parse_scalar(" 11000000 "), Some(11000000.0));
        assert_eq!(parse_scalar("1500.75"), Some(1500.75));
    }

    #[test]
    fn test_parse_scalar_rejects_everything_else() {
        assert_eq!(parse_scalar(""), None);
        assert_eq!(parse_scalar("sembilan juta"), None);
        assert_eq!(parse_scalar("NaN"), None);
        assert_eq!(parse_scalar("inf"), None);
    }
}
