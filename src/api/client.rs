//! The HTTP client itself.

use std::time::Duration;

use crate::config::ServerSettings;

use super::error::ApiError;
use super::types::SlackSettings;

/// Path of the Slack settings resource, relative to the server base URL.
const SLACK_SETTINGS_PATH: &str = "/api/v1/settings/notifications/slack";

/// Path of the one-shot test endpoint.
const SLACK_TEST_PATH: &str = "/api/v1/settings/notifications/slack/test";

/// Client for the server's notification settings API.
///
/// Cheap to clone; the underlying agent shares its connection pool.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    api_key: Option<String>,
    agent: ureq::Agent,
}

impl ApiClient {
    /// Create a client for the given base URL.
    ///
    /// `timeout` bounds each whole request; connects are capped at 5s.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .timeout(timeout)
            .build();

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            api_key,
            agent,
        }
    }

    /// Create a client from the persisted server settings.
    pub fn from_server(server: &ServerSettings) -> Self {
        Self::new(
            &server.base_url,
            server.api_key.clone(),
            Duration::from_secs(server.timeout_secs),
        )
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: &str, path: &str) -> ureq::Request {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.agent.request(method, &url);
        if let Some(key) = &self.api_key {
            req = req.set("X-Api-Key", key);
        }
        req
    }

    /// Fetch the current Slack notification settings.
    pub fn get_slack_settings(&self) -> Result<SlackSettings, ApiError> {
        let response = self
            .request("GET", SLACK_SETTINGS_PATH)
            .call()
            .map_err(|e| ApiError::from_ureq(SLACK_SETTINGS_PATH, e))?;

        response.into_json().map_err(|source| ApiError::Decode {
            path: SLACK_SETTINGS_PATH.to_string(),
            source,
        })
    }

    /// Persist new Slack notification settings.
    ///
    /// The response body is ignored; callers re-fetch to resync.
    pub fn update_slack_settings(&self, settings: &SlackSettings) -> Result<(), ApiError> {
        self.request("POST", SLACK_SETTINGS_PATH)
            .send_json(settings)
            .map_err(|e| ApiError::from_ureq(SLACK_SETTINGS_PATH, e))?;
        Ok(())
    }

    /// Ask the server to send a one-shot test notification.
    ///
    /// Nothing is persisted server-side.
    pub fn test_slack_settings(&self, settings: &SlackSettings) -> Result<(), ApiError> {
        self.request("POST", SLACK_TEST_PATH)
            .send_json(settings)
            .map_err(|e| ApiError::from_ureq(SLACK_TEST_PATH, e))?;
        Ok(())
    }
}
