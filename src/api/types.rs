//! Wire types for the Slack notification settings resource.

use serde::{Deserialize, Serialize};

use crate::notify::NotificationTypes;

/// Slack agent settings as held by the server.
///
/// Field names are camelCase on the wire to match the server's JSON API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlackSettings {
    /// Whether the Slack agent forwards notifications at all
    pub enabled: bool,
    /// Bitmask of categories forwarded to Slack
    pub types: NotificationTypes,
    /// Agent-specific options
    pub options: SlackOptions,
}

/// Options specific to the Slack agent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlackOptions {
    /// Incoming webhook endpoint that delivers into a Slack channel
    pub webhook_url: String,
}
