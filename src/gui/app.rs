//! Application state for the settings panel.
//!
//! Owns the form fields, the background API worker, and the toast queue.
//! Rendering lives in `form::panel`; the per-frame loop in `app_eframe`.

use eframe::egui;
use tracing::{info, warn};

use crate::api::ApiClient;

use super::form::{FormAction, LoadState, SlackForm};
use super::messages;
use super::toast::{ToastKind, ToastQueue};
use super::worker::{ApiCommand, ApiEvent, ApiWorker};

/// The settings panel application.
pub struct SlackPanelApp {
    pub(super) worker: ApiWorker,
    pub(super) load_state: LoadState,
    pub(super) form: SlackForm,
    /// A save request is in flight; gates both buttons
    pub(super) saving: bool,
    pub(super) toasts: ToastQueue,
}

impl SlackPanelApp {
    /// Create the app and kick off the initial fetch.
    pub fn new(client: ApiClient, ctx: egui::Context) -> Self {
        info!(
            "Administering Slack notifications at {}",
            client.base_url()
        );

        let worker = ApiWorker::spawn(client, ctx);
        worker.send(ApiCommand::Fetch);

        Self {
            worker,
            load_state: LoadState::Loading,
            form: SlackForm::default(),
            saving: false,
            toasts: ToastQueue::default(),
        }
    }

    /// Drain finished worker results (non-blocking).
    pub(super) fn handle_api_events(&mut self) {
        while let Some(event) = self.worker.try_recv() {
            self.apply_event(event);
        }
    }

    /// Apply one worker result to the app state.
    fn apply_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Loaded(Ok(settings)) => {
                // Both the initial load and the post-save resync land here;
                // server truth overwrites the fields either way.
                self.form = SlackForm::from_settings(&settings);
                self.load_state = LoadState::Ready;
            }
            ApiEvent::Loaded(Err(e)) => {
                if self.load_state == LoadState::Loading {
                    self.load_state = LoadState::Failed(e);
                } else {
                    // A failed resync keeps the current fields on screen
                    warn!("Failed to refresh Slack settings: {}", e);
                }
            }
            ApiEvent::Saved(Ok(())) => {
                self.saving = false;
                self.toasts
                    .push(ToastKind::Success, messages::SETTINGS_SAVED);
            }
            ApiEvent::Saved(Err(_)) => {
                self.saving = false;
                self.toasts.push(ToastKind::Error, messages::SETTINGS_FAILED);
            }
            ApiEvent::TestSent(Ok(())) => {
                self.toasts.push(ToastKind::Info, messages::TEST_SENT);
            }
            ApiEvent::TestSent(Err(_)) => {
                self.toasts.push(ToastKind::Error, messages::TEST_FAILED);
            }
        }
    }

    /// Turn a form action into a worker command.
    pub(super) fn dispatch(&mut self, action: FormAction) {
        match action {
            FormAction::None => {}
            FormAction::Save => {
                self.saving = true;
                self.worker
                    .send(ApiCommand::Save(self.form.save_payload()));
            }
            FormAction::Test => {
                self.worker
                    .send(ApiCommand::Test(self.form.test_payload()));
            }
            FormAction::Retry => {
                self.load_state = LoadState::Loading;
                self.worker.send(ApiCommand::Fetch);
            }
        }
    }
}
