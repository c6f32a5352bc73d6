//! eframe::App implementation for SlackPanelApp.
//!
//! Contains the per-frame loop: drain worker results, render the panel,
//! dispatch whatever the user clicked, then draw toasts on top.

use eframe::egui;

use super::app::SlackPanelApp;
use super::form::{FormPanelState, render_settings_panel};

impl eframe::App for SlackPanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_api_events();

        let action = {
            let mut panel_state = FormPanelState {
                load: &self.load_state,
                form: &mut self.form,
                saving: self.saving,
            };
            render_settings_panel(ctx, &mut panel_state)
        };
        self.dispatch(action);

        // Toasts render above whatever panel is showing
        self.toasts.render(ctx);
    }
}
