//! Background worker that talks to the server API.
//!
//! The GUI thread never blocks on HTTP. All requests run on one worker
//! thread; the form sends commands over a channel and drains results
//! non-blockingly each frame. A single worker serializes requests, so the
//! re-fetch after a save is always sequenced after the save settles.

use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use eframe::egui;
use tracing::{debug, warn};

use crate::api::{ApiClient, SlackSettings};

/// Request from the GUI to the worker.
#[derive(Debug)]
pub enum ApiCommand {
    /// Fetch the current settings
    Fetch,
    /// Persist new settings, then re-fetch to resync
    Save(SlackSettings),
    /// Send a one-shot test notification; persists nothing
    Test(SlackSettings),
}

/// Result delivered back to the GUI.
///
/// Errors are pre-rendered strings; the form only surfaces them.
#[derive(Debug)]
pub enum ApiEvent {
    Loaded(Result<SlackSettings, String>),
    Saved(Result<(), String>),
    TestSent(Result<(), String>),
}

/// Handle to the worker thread.
pub struct ApiWorker {
    tx: Sender<ApiCommand>,
    rx: Receiver<ApiEvent>,
}

impl ApiWorker {
    /// Spawn the worker thread around an API client.
    ///
    /// `ctx` is woken after every finished request so results are picked up
    /// even when the window is idle.
    pub fn spawn(client: ApiClient, ctx: egui::Context) -> Self {
        let (cmd_tx, cmd_rx) = channel();
        let (event_tx, event_rx) = channel();

        thread::spawn(move || {
            worker_loop(&client, &event_tx, &cmd_rx, &ctx);
        });

        Self {
            tx: cmd_tx,
            rx: event_rx,
        }
    }

    /// Queue a command for the worker.
    pub fn send(&self, cmd: ApiCommand) {
        let _ = self.tx.send(cmd);
    }

    /// Poll for the next finished result (non-blocking).
    pub fn try_recv(&self) -> Option<ApiEvent> {
        self.rx.try_recv().ok()
    }
}

/// Runs until the GUI drops its handle.
///
/// Results that arrive after the handle is gone fail to send and end the
/// loop, so a late response is a no-op rather than a dangling update.
fn worker_loop(
    client: &ApiClient,
    tx: &Sender<ApiEvent>,
    rx: &Receiver<ApiCommand>,
    ctx: &egui::Context,
) {
    while let Ok(cmd) = rx.recv() {
        let disconnected = match cmd {
            ApiCommand::Fetch => {
                debug!("Fetching Slack notification settings");
                let result = client.get_slack_settings().map_err(|e| e.to_string());
                if let Err(e) = &result {
                    warn!("Failed to fetch Slack settings: {}", e);
                }
                tx.send(ApiEvent::Loaded(result)).is_err()
            }
            ApiCommand::Save(settings) => {
                debug!("Saving Slack notification settings");
                let result = client
                    .update_slack_settings(&settings)
                    .map_err(|e| e.to_string());
                if let Err(e) = &result {
                    warn!("Failed to save Slack settings: {}", e);
                }
                let saved_dropped = tx.send(ApiEvent::Saved(result)).is_err();

                // Resync with server truth regardless of save outcome
                let reload = client.get_slack_settings().map_err(|e| e.to_string());
                saved_dropped || tx.send(ApiEvent::Loaded(reload)).is_err()
            }
            ApiCommand::Test(settings) => {
                debug!("Sending Slack test notification");
                let result = client
                    .test_slack_settings(&settings)
                    .map_err(|e| e.to_string());
                if let Err(e) = &result {
                    warn!("Failed to send test notification: {}", e);
                }
                tx.send(ApiEvent::TestSent(result)).is_err()
            }
        };

        if disconnected {
            break;
        }
        ctx.request_repaint();
    }
}
