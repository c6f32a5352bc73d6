//! Server connection settings.

use serde::{Deserialize, Serialize};

/// How to reach the administered server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Base URL of the server, e.g. `http://127.0.0.1:5055`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as `X-Api-Key` on every request.
    /// Leave unset for servers that allow unauthenticated local access.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5055".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}
