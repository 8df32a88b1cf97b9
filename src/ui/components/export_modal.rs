//! # Export Modal
//!
//! The CSV export dialog: pick the default Documents folder or type a custom
//! directory, see where the file will land, and run the export. The filename
//! is fixed, so the form only decides the destination directory.

use eframe::egui;
use log::{error, info};

use crate::backend::domain::export_service::EXPORT_FILE_NAME;
use crate::ui::app_state::CatatanKeuanganApp;
use crate::ui::components::styling::colors;

/// Destination choice for the export
#[derive(Debug, Clone, PartialEq)]
pub enum ExportDestination {
    /// Export to the default Documents folder
    Default,
    /// Export to a user-typed directory
    Custom,
}

impl Default for ExportDestination {
    fn default() -> Self {
        Self::Default
    }
}

/// Form state for exporting the journal
#[derive(Debug, Clone)]
pub struct ExportFormState {
    pub destination: ExportDestination,
    pub custom_path: String,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

impl ExportFormState {
    /// Create new export form state
    pub fn new() -> Self {
        Self {
            destination: ExportDestination::Default,
            custom_path: String::new(),
            success_message: None,
            error_message: None,
        }
    }

    /// Clear form fields and messages
    pub fn clear(&mut self) {
        self.destination = ExportDestination::Default;
        self.custom_path.clear();
        self.success_message = None;
        self.error_message = None;
    }

    /// Clear any previous messages
    pub fn clear_messages(&mut self) {
        self.success_message = None;
        self.error_message = None;
    }

    /// Set success message
    pub fn set_success(&mut self, message: String) {
        self.success_message = Some(message);
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
        self.success_message = None;
    }

    /// Check if the form can be submitted
    pub fn is_ready_for_export(&self) -> bool {
        match self.destination {
            ExportDestination::Default => true,
            ExportDestination::Custom => !self.custom_path.trim().is_empty(),
        }
    }

    /// The custom directory to pass along, if one applies
    pub fn effective_custom_path(&self) -> Option<String> {
        match self.destination {
            ExportDestination::Default => None,
            ExportDestination::Custom => {
                let path = self.custom_path.trim();
                if path.is_empty() {
                    None
                } else {
                    Some(path.to_string())
                }
            }
        }
    }

    /// Directory shown in the preview row
    pub fn preview_location(&self) -> String {
        match self.destination {
            ExportDestination::Default => {
                if let Some(docs_dir) = dirs::document_dir() {
                    docs_dir.to_string_lossy().to_string()
                } else if let Some(home_dir) = dirs::home_dir() {
                    home_dir.to_string_lossy().to_string()
                } else {
                    "Folder Documents".to_string()
                }
            }
            ExportDestination::Custom => {
                if self.custom_path.trim().is_empty() {
                    "Belum ada folder dipilih".to_string()
                } else {
                    self.custom_path.trim().to_string()
                }
            }
        }
    }
}

impl Default for ExportFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatatanKeuanganApp {
    /// Render the export modal
    pub fn render_export_modal(&mut self, ctx: &egui::Context) {
        if !self.show_export_modal {
            return;
        }

        // Area with Foreground order so the modal sits above everything
        egui::Area::new(egui::Id::new("export_modal_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                // Dark semi-transparent background
                let screen_rect = ctx.screen_rect();
                ui.painter().rect_filled(
                    screen_rect,
                    egui::Rounding::ZERO,
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 128),
                );

                ui.allocate_ui_at_rect(screen_rect, |ui| {
                    ui.centered_and_justified(|ui| {
                        modal_frame().show(ui, |ui| {
                            ui.set_min_size(egui::vec2(420.0, 340.0));
                            ui.set_max_size(egui::vec2(420.0, 380.0));

                            ui.vertical_centered(|ui| {
                                ui.add_space(10.0);

                                ui.label(
                                    egui::RichText::new("Export ke Excel")
                                        .font(egui::FontId::new(
                                            22.0,
                                            egui::FontFamily::Proportional,
                                        ))
                                        .strong(),
                                );

                                ui.add_space(6.0);

                                ui.label(
                                    egui::RichText::new("Simpan semua catatan sebagai file CSV")
                                        .font(egui::FontId::new(
                                            14.0,
                                            egui::FontFamily::Proportional,
                                        ))
                                        .color(colors::MUTED_TEXT),
                                );

                                ui.add_space(16.0);

                                self.render_export_form_content(ui);

                                ui.add_space(16.0);

                                self.render_export_action_buttons(ui);

                                ui.add_space(10.0);
                            });
                        });
                    });
                });

                // Backdrop clicks close the modal
                if ui.ctx().input(|i| i.pointer.any_click()) {
                    if let Some(pointer_pos) = ui.ctx().input(|i| i.pointer.latest_pos()) {
                        let modal_rect = egui::Rect::from_center_size(
                            ui.ctx().screen_rect().center(),
                            egui::vec2(420.0, 380.0),
                        );

                        if !modal_rect.contains(pointer_pos) {
                            self.close_export_modal();
                        }
                    }
                }
            });
    }

    /// Render the form content for the export modal
    fn render_export_form_content(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new("Lokasi Export").strong());

            ui.add_space(8.0);

            let default_selected = self.export_form.destination == ExportDestination::Default;
            if ui.radio(default_selected, "Folder Documents (bawaan)").clicked() {
                self.export_form.destination = ExportDestination::Default;
                self.export_form.clear_messages();
            }

            ui.add_space(4.0);

            let custom_selected = self.export_form.destination == ExportDestination::Custom;
            if ui.radio(custom_selected, "Folder lain").clicked() {
                self.export_form.destination = ExportDestination::Custom;
                self.export_form.clear_messages();
            }

            if self.export_form.destination == ExportDestination::Custom {
                ui.add_space(8.0);
                ui.add(
                    egui::TextEdit::singleline(&mut self.export_form.custom_path)
                        .hint_text("Contoh: /home/user/Dokumen")
                        .desired_width(f32::INFINITY),
                );
            }

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("File:").color(colors::MUTED_TEXT));
                ui.label(
                    egui::RichText::new(EXPORT_FILE_NAME)
                        .font(egui::FontId::new(13.0, egui::FontFamily::Monospace)),
                );
            });
            ui.label(egui::RichText::new("Disimpan di:").color(colors::MUTED_TEXT));
            ui.label(
                egui::RichText::new(self.export_form.preview_location())
                    .font(egui::FontId::new(13.0, egui::FontFamily::Monospace)),
            );

            if let Some(ref success_msg) = self.export_form.success_message {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(format!("✅ {}", success_msg))
                        .color(egui::Color32::from_rgb(0, 150, 0)),
                );
            }

            if let Some(ref error_msg) = self.export_form.error_message {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(format!("❌ {}", error_msg))
                        .color(egui::Color32::from_rgb(200, 0, 0)),
                );
            }
        });
    }

    /// Render action buttons for the export modal
    fn render_export_action_buttons(&mut self, ui: &mut egui::Ui) {
        let form_ready = self.export_form.is_ready_for_export();

        let mut should_export = false;
        let mut should_cancel = false;

        ui.horizontal(|ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Batal").clicked() {
                    should_cancel = true;
                }

                ui.add_space(10.0);

                let button = egui::Button::new(egui::RichText::new("Export").strong()).fill(
                    if form_ready {
                        egui::Color32::from_rgb(70, 130, 180)
                    } else {
                        egui::Color32::LIGHT_GRAY
                    },
                );

                if ui.add_enabled(form_ready, button).clicked() {
                    should_export = true;
                }
            });
        });

        // Handle actions outside the UI closure to avoid borrowing conflicts
        if should_export {
            self.submit_export_form();
        }
        if should_cancel {
            self.close_export_modal();
        }
    }

    /// Submit the export form
    fn submit_export_form(&mut self) {
        if !self.export_form.is_ready_for_export() {
            return;
        }

        self.export_form.clear_messages();
        let custom_path = self.export_form.effective_custom_path();

        let result = self.backend.export_service.export_to_path(
            self.backend.journal_service.entries(),
            custom_path.as_deref(),
        );

        match result {
            Ok(outcome) => {
                info!("Export completed: {}", outcome.file_path);
                self.export_form.set_success(format!(
                    "{} catatan diekspor ke:\n{}",
                    outcome.entry_count, outcome.file_path
                ));
            }
            Err(e) => {
                error!("Export failed: {}", e);
                self.export_form.set_error(format!("Export gagal: {}", e));
            }
        }
    }

    /// Close the export modal and reset its form
    pub fn close_export_modal(&mut self) {
        self.show_export_modal = false;
        self.export_form.clear();
    }
}

/// Frame styling for the modal window
fn modal_frame() -> egui::Frame {
    egui::Frame::window(&egui::Style::default())
        .fill(colors::CARD_BACKGROUND)
        .stroke(egui::Stroke::new(2.0, egui::Color32::from_rgb(70, 130, 180)))
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(20.0))
        .shadow(egui::Shadow {
            offset: egui::vec2(4.0, 4.0),
            blur: 16.0,
            spread: 0.0,
            color: egui::Color32::from_rgba_unmultiplied(0, 0, 0, 100),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_destination_is_always_ready() {
        let form = ExportFormState::new();
        assert!(form.is_ready_for_export());
        assert_eq!(form.effective_custom_path(), None);
    }

    #[test]
    fn test_custom_destination_needs_a_path() {
        let mut form = ExportFormState::new();
        form.destination = ExportDestination::Custom;
        assert!(!form.is_ready_for_export());

        form.custom_path = "   ".to_string();
        assert!(!form.is_ready_for_export());

        form.custom_path = " /tmp/exports ".to_string();
        assert!(form.is_ready_for_export());
        assert_eq!(form.effective_custom_path(), Some("/tmp/exports".to_string()));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut form = ExportFormState::new();
        form.destination = ExportDestination::Custom;
        form.custom_path = "/tmp".to_string();
        form.set_error("nope".to_string());

        form.clear();
        assert_eq!(form.destination, ExportDestination::Default);
        assert!(form.custom_path.is_empty());
        assert!(form.error_message.is_none());
        assert!(form.success_message.is_none());
    }

    #[test]
    fn test_messages_replace_each_other() {
        let mut form = ExportFormState::new();
        form.set_error("gagal".to_string());
        form.set_success("berhasil".to_string());
        assert!(form.error_message.is_none());
        assert_eq!(form.success_message, Some("berhasil".to_string()));
    }
}
