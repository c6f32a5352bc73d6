//! Main settings panel rendering.
//!
//! Immediate-mode rendering returns the action the user triggered this
//! frame; the app owns the side effects.

use eframe::egui::{self, RichText, ScrollArea};

use crate::gui::messages;
use crate::gui::theme::{
    ACCENT_CYAN, ACCENT_INDIGO, ACCENT_RED, ACCENT_YELLOW, BG_HIGHLIGHT, BG_PRIMARY, TEXT_DIM,
    TEXT_PRIMARY,
};

use super::helpers::{
    render_checkbox_field, render_field_error, render_section_frame, render_text_field,
};
use super::state::{LoadState, SlackForm};
use super::types_select::render_types_selector;

/// Action requested by the user this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    /// Persist current field values
    Save,
    /// Send a test notification with current field values
    Test,
    /// Re-run the initial fetch after a load failure
    Retry,
}

/// Borrowed view of the app state the panel renders from.
pub struct FormPanelState<'a> {
    pub load: &'a LoadState,
    pub form: &'a mut SlackForm,
    /// A save request is in flight
    pub saving: bool,
}

/// Render the settings view and report the triggered action.
pub fn render_settings_panel(ctx: &egui::Context, state: &mut FormPanelState<'_>) -> FormAction {
    let mut action = FormAction::None;

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(16.0))
        .show(ctx, |ui| match state.load {
            LoadState::Loading => render_loading(ui),
            LoadState::Failed(message) => {
                if render_load_error(ui, message) {
                    action = FormAction::Retry;
                }
            }
            LoadState::Ready => {
                ui.label(
                    RichText::new("SLACK NOTIFICATIONS")
                        .monospace()
                        .size(18.0)
                        .color(TEXT_PRIMARY),
                );
                ui.add_space(12.0);

                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        render_info_banner(ui);
                        ui.add_space(12.0);
                        action = render_form(ui, state.form, state.saving);
                    });
            }
        });

    action
}

/// While the initial fetch is in flight, show the spinner and nothing else.
fn render_loading(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.add(egui::Spinner::new().size(32.0));
    });
}

/// Load failure state. Returns true when retry was clicked.
fn render_load_error(ui: &mut egui::Ui, message: &str) -> bool {
    let mut retry = false;
    render_section_frame(ui, |ui| {
        ui.label(
            RichText::new(messages::LOAD_FAILED)
                .strong()
                .color(ACCENT_RED),
        );
        ui.add_space(4.0);
        ui.label(RichText::new(message).small().color(TEXT_DIM));
        ui.add_space(8.0);
        retry = ui.button(messages::RETRY).clicked();
    });
    retry
}

/// Info banner pointing at Slack's incoming webhook setup.
fn render_info_banner(ui: &mut egui::Ui) {
    egui::Frame::NONE
        .fill(BG_HIGHLIGHT)
        .corner_radius(4.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.label(
                RichText::new(messages::SETTING_UP_SLACK)
                    .strong()
                    .color(ACCENT_CYAN),
            );
            ui.add_space(4.0);
            ui.label(RichText::new(messages::SETTING_UP_SLACK_DESCRIPTION).color(TEXT_DIM));
            ui.hyperlink_to(
                RichText::new("Incoming Webhook").color(ACCENT_CYAN),
                messages::WEBHOOK_HELP_URL,
            );
        });
}

/// The editable form plus its action buttons.
fn render_form(ui: &mut egui::Ui, form: &mut SlackForm, saving: bool) -> FormAction {
    let mut action = FormAction::None;

    render_section_frame(ui, |ui| {
        render_checkbox_field(ui, messages::AGENT_ENABLED, &mut form.enabled);
        ui.add_space(8.0);

        let response = render_text_field(
            ui,
            messages::WEBHOOK_URL,
            &mut form.webhook_url,
            messages::WEBHOOK_URL_PLACEHOLDER,
        );
        if response.changed() || response.lost_focus() {
            form.webhook_touched = true;
        }
        if form.webhook_touched {
            if let Some(error) = form.webhook_url_error() {
                ui.add_space(2.0);
                render_field_error(ui, error);
            }
        }
    });

    ui.add_space(12.0);
    ui.label(
        RichText::new(messages::NOTIFICATION_TYPES)
            .monospace()
            .color(TEXT_PRIMARY),
    );
    ui.add_space(8.0);

    render_section_frame(ui, |ui| {
        render_types_selector(ui, &mut form.types);
    });

    ui.add_space(16.0);
    ui.separator();
    ui.add_space(8.0);

    // Save and Test share the same gate: a valid form and no save in flight
    let can_submit = form.is_valid() && !saving;

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        let save_label = if saving {
            messages::SAVING
        } else {
            messages::SAVE
        };
        if ui
            .add_enabled(
                can_submit,
                egui::Button::new(RichText::new(save_label).color(ACCENT_INDIGO)),
            )
            .clicked()
        {
            action = FormAction::Save;
        }

        if ui
            .add_enabled(
                can_submit,
                egui::Button::new(RichText::new(messages::TEST).color(ACCENT_YELLOW)),
            )
            .clicked()
        {
            action = FormAction::Test;
        }
    });

    action
}
