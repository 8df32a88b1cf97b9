//! # Expense Pie Chart
//!
//! Draws the "Distribusi Pengeluaran" card with egui's painting primitives:
//! one filled slice per expense category plus a legend row with the amount
//! and share. Slice colors cycle the fixed palette in the order categories
//! first appeared in the journal.

use eframe::egui;
use std::f32::consts::{PI, TAU};

use crate::backend::domain::report::CategoryTotal;
use crate::ui::components::styling::{draw_card_container, pie_color};
use crate::ui::mappers::format_rupiah;

/// Configuration for the pie chart appearance
#[derive(Debug, Clone)]
pub struct PieChartConfig {
    /// Radius of the pie
    pub radius: f32,
    /// Font size for the card title
    pub title_font_size: f32,
    /// Font size for legend rows
    pub legend_font_size: f32,
    /// Height of one legend row
    pub legend_row_height: f32,
}

impl Default for PieChartConfig {
    fn default() -> Self {
        Self {
            radius: 100.0,
            title_font_size: 18.0,
            legend_font_size: 14.0,
            legend_row_height: 22.0,
        }
    }
}

/// Render the expense distribution card. Callers skip the card entirely when
/// there are no expense totals.
pub fn render_pie_chart(ui: &mut egui::Ui, totals: &[CategoryTotal]) {
    render_pie_chart_with_config(ui, totals, &PieChartConfig::default());
}

/// Render the expense distribution card with custom appearance
pub fn render_pie_chart_with_config(
    ui: &mut egui::Ui,
    totals: &[CategoryTotal],
    config: &PieChartConfig,
) {
    let grand_total: f64 = totals.iter().map(|t| t.total).sum();
    if grand_total <= 0.0 {
        return;
    }

    let width = ui.available_width();
    let title_height = config.title_font_size + 16.0;
    let pie_height = config.radius * 2.0 + 16.0;
    let legend_height = totals.len() as f32 * config.legend_row_height + 12.0;
    let height = title_height + pie_height + legend_height + 16.0;

    let (rect, _response) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    draw_card_container(ui, rect, 12.0);

    let painter = ui.painter();

    painter.text(
        egui::pos2(rect.center().x, rect.top() + 16.0),
        egui::Align2::CENTER_TOP,
        "Distribusi Pengeluaran",
        egui::FontId::new(config.title_font_size, egui::FontFamily::Proportional),
        egui::Color32::from_rgb(60, 60, 60),
    );

    // Slices start at 12 o'clock and run clockwise
    let center = egui::pos2(
        rect.center().x,
        rect.top() + title_height + 8.0 + config.radius,
    );
    let mut start_angle = -PI / 2.0;
    for (index, total) in totals.iter().enumerate() {
        let sweep = (total.total / grand_total) as f32 * TAU;
        draw_pie_slice(painter, center, config.radius, start_angle, sweep, pie_color(index));
        start_angle += sweep;
    }

    // Legend, one row per category in slice order
    let legend_left = rect.left() + 24.0;
    let legend_top = center.y + config.radius + 16.0;
    for (index, total) in totals.iter().enumerate() {
        let row_y = legend_top + index as f32 * config.legend_row_height;

        let swatch =
            egui::Rect::from_min_size(egui::pos2(legend_left, row_y), egui::vec2(12.0, 12.0));
        painter.rect_filled(swatch, egui::Rounding::same(3.0), pie_color(index));

        let share = total.total / grand_total * 100.0;
        painter.text(
            egui::pos2(legend_left + 20.0, row_y + 6.0),
            egui::Align2::LEFT_CENTER,
            format!(
                "{}: Rp {} ({:.1}%)",
                total.category,
                format_rupiah(total.total),
                share
            ),
            egui::FontId::new(config.legend_font_size, egui::FontFamily::Proportional),
            egui::Color32::from_rgb(60, 60, 60),
        );
    }
}

/// Draw one filled slice as a fan of small triangles (egui has no native
/// filled-arc shape).
fn draw_pie_slice(
    painter: &egui::Painter,
    center: egui::Pos2,
    radius: f32,
    start_angle: f32,
    sweep: f32,
    color: egui::Color32,
) {
    if sweep <= 0.0 {
        return;
    }

    // Segment count scaled by arc length, roughly 3 pixels per segment
    let num_segments = ((sweep * radius / 3.0).ceil() as i32).clamp(2, 200);
    let angle_step = sweep / num_segments as f32;

    for i in 0..num_segments {
        let angle1 = start_angle + angle_step * i as f32;
        let angle2 = start_angle + angle_step * (i + 1) as f32;

        let point1 = egui::pos2(
            center.x + radius * angle1.cos(),
            center.y + radius * angle1.sin(),
        );
        let point2 = egui::pos2(
            center.x + radius * angle2.cos(),
            center.y + radius * angle2.sin(),
        );

        painter.add(egui::Shape::convex_polygon(
            vec![center, point1, point2],
            color,
            egui::Stroke::NONE,
        ));
    }
}
