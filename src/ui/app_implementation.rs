use eframe::egui;

use crate::backend::domain::report;
use crate::ui::app_state::CatatanKeuanganApp;
use crate::ui::components::entry_list::render_entry_list;
use crate::ui::components::pie_chart::render_pie_chart;
use crate::ui::components::styling::{card_frame, colors, setup_app_style};
use crate::ui::mappers::format_rupiah;

impl eframe::App for CatatanKeuanganApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_app_style(ctx);

        // Clear messages after a delay
        if self.error_message.is_some() || self.success_message.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_secs(5));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    // Single centered column, like the web layout
                    let total_width = ui.available_width();
                    let column_width = total_width.min(520.0);
                    let side_margin = ((total_width - column_width) / 2.0).max(0.0);

                    ui.horizontal(|ui| {
                        ui.add_space(side_margin);
                        ui.vertical(|ui| {
                            ui.set_width(column_width);

                            ui.add_space(12.0);
                            self.render_header(ui);
                            self.render_messages(ui);

                            ui.add_space(8.0);
                            self.render_settings_card(ui);

                            ui.add_space(12.0);
                            self.render_entry_form_card(ui);

                            ui.add_space(12.0);
                            self.render_summary_section(ui);

                            ui.add_space(12.0);
                            self.render_export_button(ui);

                            ui.add_space(12.0);
                            self.render_chart_section(ui);

                            self.render_entry_section(ui);
                            ui.add_space(16.0);
                        });
                    });
                });
        });

        // Render modals
        self.render_export_modal(ctx);
    }
}

impl CatatanKeuanganApp {
    /// Render the page title
    fn render_header(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading("Catatan Keuangan Harian");
        });
    }

    /// Render error and success messages
    fn render_messages(&self, ui: &mut egui::Ui) {
        if let Some(error) = &self.error_message {
            ui.colored_label(egui::Color32::RED, format!("❌ {}", error));
        }
        if let Some(success) = &self.success_message {
            ui.colored_label(egui::Color32::from_rgb(0, 150, 0), format!("✅ {}", success));
        }
    }

    /// Render the balance, savings and tagline block
    fn render_summary_section(&self, ui: &mut egui::Ui) {
        let balance = report::balance(self.backend.journal_service.entries());
        let savings = self.backend.journal_service.journal().savings;

        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(format!("Saldo Sekarang: Rp {}", format_rupiah(balance)))
                    .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                    .strong(),
            );
            ui.label(
                egui::RichText::new(format!("Tabungan: Rp {}", format_rupiah(savings)))
                    .font(egui::FontId::new(16.0, egui::FontFamily::Proportional)),
            );
            ui.label(
                egui::RichText::new(
                    "Belajar investasi dimulai dari mencatat uangmu. Konsisten itu cuan! 💪📈",
                )
                .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                .color(colors::MUTED_TEXT),
            );
        });
    }

    /// Render the full-width export trigger
    fn render_export_button(&mut self, ui: &mut egui::Ui) {
        let button = egui::Button::new(egui::RichText::new("Export ke Excel").strong());
        if ui.add_sized([ui.available_width(), 36.0], button).clicked() {
            self.show_export_modal = true;
        }
    }

    /// Render the expense distribution card, when there is anything to show
    fn render_chart_section(&self, ui: &mut egui::Ui) {
        let totals = report::expense_totals_by_category(self.backend.journal_service.entries());
        if totals.is_empty() {
            return;
        }

        render_pie_chart(ui, &totals);
        ui.add_space(12.0);
    }

    /// Render the entry table
    fn render_entry_section(&self, ui: &mut egui::Ui) {
        card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            render_entry_list(ui, self.backend.journal_service.entries());
        });
    }
}
