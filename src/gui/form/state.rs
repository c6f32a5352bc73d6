//! Editable state for the Slack settings form.

use crate::api::{SlackOptions, SlackSettings};
use crate::gui::messages;
use crate::notify::NotificationTypes;

/// Lifecycle of the settings panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Initial fetch in flight; render only the loading indicator
    #[default]
    Loading,
    /// Settings loaded; the form is editable
    Ready,
    /// Initial fetch failed; render the error with a retry action
    Failed(String),
}

/// In-memory form fields, initialized from the server and edited locally.
#[derive(Debug, Clone, Default)]
pub struct SlackForm {
    pub enabled: bool,
    pub webhook_url: String,
    pub types: NotificationTypes,
    /// Set once the webhook field has been edited, so the inline error
    /// only appears after the user has touched it
    pub webhook_touched: bool,
}

impl SlackForm {
    /// Initialize fields from server-held settings.
    pub fn from_settings(settings: &SlackSettings) -> Self {
        Self {
            enabled: settings.enabled,
            webhook_url: settings.options.webhook_url.clone(),
            types: settings.types,
            webhook_touched: false,
        }
    }

    /// Inline validation error for the webhook URL field, if any.
    pub fn webhook_url_error(&self) -> Option<&'static str> {
        if self.webhook_url.trim().is_empty() {
            Some(messages::WEBHOOK_URL_REQUIRED)
        } else {
            None
        }
    }

    /// Whether a save request may be issued.
    pub fn is_valid(&self) -> bool {
        self.webhook_url_error().is_none()
    }

    /// Body for a settings update, from current field state.
    pub fn save_payload(&self) -> SlackSettings {
        SlackSettings {
            enabled: self.enabled,
            types: self.types,
            options: SlackOptions {
                webhook_url: self.webhook_url.trim().to_string(),
            },
        }
    }

    /// Body for a test send.
    ///
    /// `enabled` is forced on so a test goes out even while the agent
    /// checkbox is off, and the in-memory (possibly unsaved) values are
    /// used rather than whatever the server last persisted.
    pub fn test_payload(&self) -> SlackSettings {
        SlackSettings {
            enabled: true,
            ..self.save_payload()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationType;

    fn loaded_settings() -> SlackSettings {
        SlackSettings {
            enabled: true,
            types: NotificationTypes::from_bits(5),
            options: SlackOptions {
                webhook_url: "https://hooks.example/abc".to_string(),
            },
        }
    }

    #[test]
    fn test_fields_initialize_from_loaded_settings() {
        let form = SlackForm::from_settings(&loaded_settings());

        assert!(form.enabled);
        assert_eq!(form.types.bits(), 5);
        assert_eq!(form.webhook_url, "https://hooks.example/abc");
        assert!(!form.webhook_touched);
    }

    #[test]
    fn test_empty_webhook_url_blocks_submission() {
        let mut form = SlackForm::from_settings(&loaded_settings());
        form.webhook_url.clear();

        assert!(!form.is_valid());
        assert_eq!(
            form.webhook_url_error(),
            Some(messages::WEBHOOK_URL_REQUIRED)
        );
    }

    #[test]
    fn test_whitespace_only_webhook_url_is_invalid() {
        let mut form = SlackForm::from_settings(&loaded_settings());
        form.webhook_url = "   ".to_string();

        assert!(!form.is_valid());
    }

    #[test]
    fn test_save_payload_matches_field_state() {
        let mut form = SlackForm::from_settings(&loaded_settings());
        form.enabled = false;
        form.webhook_url = "  https://hooks.example/new  ".to_string();
        form.types.insert(NotificationType::IssueCreated);

        let payload = form.save_payload();
        assert!(!payload.enabled);
        assert_eq!(payload.types.bits(), 5 | 256);
        assert_eq!(payload.options.webhook_url, "https://hooks.example/new");
    }

    #[test]
    fn test_test_payload_forces_enabled() {
        let mut form = SlackForm::from_settings(&loaded_settings());
        form.enabled = false;

        let payload = form.test_payload();
        assert!(payload.enabled);
        assert_eq!(payload.types, form.types);
        assert_eq!(payload.options.webhook_url, form.webhook_url);
    }

    #[test]
    fn test_types_replace_round_trips() {
        let mut form = SlackForm::from_settings(&loaded_settings());
        let replacement = NotificationTypes::from_bits(0b1010_1010);
        form.types = replacement;

        assert_eq!(form.save_payload().types, replacement);
    }
}
