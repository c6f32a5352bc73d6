//! Init command implementation

use std::path::Path;

use anyhow::{Result, bail};

/// Default configuration content for slackpanel init
pub const DEFAULT_CONFIG: &str = r#"# slackpanel configuration
#
# slackpanel edits the Slack notification settings of the server below.
# Nothing notification-related is stored in this file.

[server]
# Base URL of the server exposing /api/v1/settings/notifications/slack
base_url = "http://127.0.0.1:5055"

# API key sent as `X-Api-Key` on every request.
# Leave commented out for servers that allow unauthenticated local access.
# api_key = ""

# Per-request timeout in seconds
timeout_secs = 30
"#;

/// Initialize a new slackpanel configuration file.
pub fn init_command(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
