//! slackpanel - Slack notification settings for your media server
//!
//! slackpanel is a small desktop admin panel for servers that expose the
//! `/api/v1/settings/notifications/slack` resource. It loads the server's
//! Slack agent configuration, lets you edit it (enable/disable, webhook
//! URL, notification categories), saves it back, and sends test
//! notifications - without touching Slack directly.
//!
//! ## Usage
//!
//! 1. **GUI (Primary)**: `slackpanel` opens the settings window.
//!
//! 2. **CLI**: `slackpanel show` prints the current settings and
//!    `slackpanel test` fires a test notification from the terminal.

pub mod api;
pub mod config;
pub mod gui;
pub mod notify;
