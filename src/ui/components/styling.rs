//! # Styling Module
//!
//! This module contains all styling functions and color constants for the
//! journal app: the global egui style, card painting, and the palette used
//! for entry accents and the expense pie chart.

use eframe::egui;

use crate::backend::domain::models::entry::EntryKind;

/// Setup a clean, readable UI style for the entire application
pub fn setup_app_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.window_fill = colors::PAGE_BACKGROUND;
        style.visuals.panel_fill = colors::PAGE_BACKGROUND;
        style.visuals.button_frame = true;

        // Text edits need their own background to stand out on the page
        style.visuals.extreme_bg_color = egui::Color32::from_rgb(248, 248, 248);

        // Larger text for readability
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(26.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );

        // Rounded corners and padding
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);

        style
    });
}

/// Color constants for the journal theme
pub mod colors {
    use eframe::egui::Color32;

    // Page and cards
    pub const PAGE_BACKGROUND: Color32 = Color32::from_rgb(246, 247, 249);
    pub const CARD_BACKGROUND: Color32 = Color32::WHITE;
    pub const CARD_SHADOW: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 20);

    // Entry accents, matching the list border colors of the web version
    pub const EXPENSE_ACCENT: Color32 = Color32::from_rgb(248, 113, 113); // #f87171
    pub const INCOME_ACCENT: Color32 = Color32::from_rgb(52, 211, 153); // #34d399

    // Muted text (tagline, secondary rows)
    pub const MUTED_TEXT: Color32 = Color32::from_rgb(120, 120, 120);

    /// Slice colors for the expense distribution pie, cycled in order.
    pub const PIE_PALETTE: [Color32; 7] = [
        Color32::from_rgb(136, 132, 216), // #8884d8
        Color32::from_rgb(130, 202, 157), // #82ca9d
        Color32::from_rgb(255, 198, 88),  // #ffc658
        Color32::from_rgb(255, 107, 107), // #ff6b6b
        Color32::from_rgb(0, 196, 159),   // #00c49f
        Color32::from_rgb(255, 140, 0),   // #ff8c00
        Color32::from_rgb(141, 209, 225), // #8dd1e1
    ];
}

/// Accent color for an entry row: red for expenses, green for income.
pub fn entry_accent(kind: EntryKind) -> egui::Color32 {
    match kind {
        EntryKind::Expense => colors::EXPENSE_ACCENT,
        EntryKind::Income => colors::INCOME_ACCENT,
    }
}

/// Frame for the page cards (settings, entry form, entry list)
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(colors::CARD_BACKGROUND)
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(16.0))
        .shadow(egui::Shadow {
            offset: egui::vec2(0.0, 2.0),
            blur: 8.0,
            spread: 0.0,
            color: colors::CARD_SHADOW,
        })
}

/// Draw a card container with white background and a subtle shadow
pub fn draw_card_container(ui: &mut egui::Ui, rect: egui::Rect, rounding: f32) {
    let painter = ui.painter();

    // Shadow first, offset slightly
    let shadow_rect = egui::Rect::from_min_size(rect.min + egui::vec2(2.0, 2.0), rect.size());
    painter.rect_filled(shadow_rect, egui::Rounding::same(rounding), colors::CARD_SHADOW);

    painter.rect_filled(rect, egui::Rounding::same(rounding), colors::CARD_BACKGROUND);
}

/// Pick the pie slice color for a category by its first-seen position.
pub fn pie_color(index: usize) -> egui::Color32 {
    colors::PIE_PALETTE[index % colors::PIE_PALETTE.len()]
}
