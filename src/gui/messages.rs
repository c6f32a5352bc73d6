//! User-facing strings for the settings panel.
//!
//! Kept in one place so copy stays consistent between the GUI and the CLI.

pub const SAVE: &str = "Save Changes";
pub const SAVING: &str = "Saving...";
pub const AGENT_ENABLED: &str = "Agent Enabled";
pub const WEBHOOK_URL: &str = "Webhook URL";
pub const WEBHOOK_URL_REQUIRED: &str = "You must provide a webhook URL";
pub const WEBHOOK_URL_PLACEHOLDER: &str = "Webhook URL";
pub const SETTINGS_SAVED: &str = "Slack notification settings saved!";
pub const SETTINGS_FAILED: &str = "Slack notification settings failed to save.";
pub const TEST_SENT: &str = "Test notification sent!";
pub const TEST_FAILED: &str = "Test notification failed to send.";
pub const TEST: &str = "Test";
pub const SETTING_UP_SLACK: &str = "Setting up Slack Notifications";
pub const SETTING_UP_SLACK_DESCRIPTION: &str = "To use Slack notifications, you will need to \
     create an Incoming Webhook integration and use the provided webhook URL below.";
pub const NOTIFICATION_TYPES: &str = "Notification Types";
pub const LOAD_FAILED: &str = "Failed to load Slack notification settings";
pub const RETRY: &str = "Retry";

/// Where to create an incoming webhook; linked from the info banner.
pub const WEBHOOK_HELP_URL: &str = "https://my.slack.com/services/new/incoming-webhook/";
