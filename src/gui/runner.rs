//! GUI runner - launches the settings panel window.

use anyhow::Result;
use eframe::egui;

use super::app::SlackPanelApp;
use crate::api::ApiClient;
use crate::config::Config;

/// Run the settings panel against the configured server.
pub fn run_gui(config: Config) -> Result<()> {
    let client = ApiClient::from_server(&config.server);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([620.0, 720.0])
            .with_min_inner_size([480.0, 480.0])
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "slackpanel",
        options,
        Box::new(move |cc| Ok(Box::new(SlackPanelApp::new(client, cc.egui_ctx.clone())))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
