//! UI helpers shared by the form sections.

use eframe::egui::{self, RichText};

use crate::gui::theme::{ACCENT_RED, BG_SECONDARY, TEXT_DIM, TEXT_PRIMARY};

/// Width reserved for field labels so the inputs line up.
pub const LABEL_WIDTH: f32 = 150.0;

/// Render a labeled single-line text input. Returns the field response.
pub fn render_text_field(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
) -> egui::Response {
    ui.horizontal(|ui| {
        ui.add_sized(
            [LABEL_WIDTH, 20.0],
            egui::Label::new(RichText::new(label).color(TEXT_DIM)),
        );
        ui.add(
            egui::TextEdit::singleline(value)
                .font(egui::TextStyle::Monospace)
                .text_color(TEXT_PRIMARY)
                .hint_text(hint)
                .desired_width(f32::INFINITY),
        )
    })
    .inner
}

/// Render a labeled checkbox. Returns the checkbox response.
pub fn render_checkbox_field(ui: &mut egui::Ui, label: &str, value: &mut bool) -> egui::Response {
    ui.horizontal(|ui| {
        ui.add_sized(
            [LABEL_WIDTH, 20.0],
            egui::Label::new(RichText::new(label).color(TEXT_DIM)),
        );
        ui.checkbox(value, "")
    })
    .inner
}

/// Render an inline validation error beneath a field.
pub fn render_field_error(ui: &mut egui::Ui, message: &str) {
    ui.horizontal(|ui| {
        ui.add_space(LABEL_WIDTH + 8.0);
        ui.label(RichText::new(message).small().color(ACCENT_RED));
    });
}

/// Render a section frame with secondary background.
pub fn render_section_frame<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::NONE
        .fill(BG_SECONDARY)
        .corner_radius(4.0)
        .inner_margin(12.0)
        .show(ui, add_contents)
        .inner
}
