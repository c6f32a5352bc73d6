//! Show command implementation

use anyhow::{Context, Result};

use slackpanel::api::ApiClient;
use slackpanel::notify::NotificationType;

/// Print the server's current Slack notification settings.
pub fn show_command(client: &ApiClient) -> Result<()> {
    let settings = client
        .get_slack_settings()
        .context("Failed to fetch Slack notification settings")?;

    println!(
        "Slack notifications: {}",
        if settings.enabled { "enabled" } else { "disabled" }
    );

    let url = settings.options.webhook_url.trim();
    if url.is_empty() {
        println!("Webhook URL: (not set)");
    } else {
        println!("Webhook URL: {}", url);
    }

    println!("Notification types:");
    for ty in NotificationType::ALL {
        let mark = if settings.types.contains(ty) { "x" } else { " " };
        println!("  [{}] {}", mark, ty.display_name());
    }

    Ok(())
}
