//! Host configuration structure
//!
//! Deserialized from the JSON payload the host sends at startup.
//! Key names follow the host plugin schema (camelCase).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

use crate::color::ArgbColor;
use crate::error::ConfigurationError;

/// Top-level configuration, immutable once constructed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default)]
    pub application_code: String,
    #[serde(default)]
    pub android_settings: AndroidSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy_settings: Option<PrivacySettings>,
    #[serde(default)]
    pub default_message_storage: bool,
    #[serde(default)]
    pub in_app_chat_enabled: bool,
    #[serde(default)]
    pub notification_categories: Vec<NotificationCategory>,
}

/// Platform credentials and notification display settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firebase_sender_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_icon: Option<String>,
    #[serde(default)]
    pub multiple_notifications: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_accent_color: Option<String>,
}

/// Independent opt-outs of SDK data collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    #[serde(default)]
    pub user_data_persisting_disabled: bool,
    #[serde(default)]
    pub carrier_info_sending_disabled: bool,
    #[serde(default)]
    pub system_info_sending_disabled: bool,
}

/// Named, ordered group of interactive notification buttons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationCategory {
    pub identifier: String,
    #[serde(default)]
    pub actions: Vec<NotificationAction>,
}

/// One interactive notification button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationAction {
    pub identifier: String,
    pub icon: String,
    pub title: String,
    /// Brings the app to foreground when tapped
    pub foreground: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_input_placeholder: Option<String>,
    /// Requires a user reply (sent back as a mobile-originated message)
    pub mo_required: bool,
}

impl Configuration {
    /// Parse configuration from the host JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let config: Configuration = serde_json::from_str(json)?;
        debug!(application_code = %config.application_code, categories = config.notification_categories.len(), "Parsed configuration");
        Ok(config)
    }

    /// Parse configuration from an already decoded JSON value
    pub fn from_value(value: Value) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn sender_id(&self) -> Option<&str> {
        self.android_settings.firebase_sender_id.as_deref()
    }

    /// Check everything that would abort SDK initialization
    /// Called before resolution so no side effect runs on a bad config
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.application_code.is_empty() {
            return Err(ConfigurationError::missing("applicationCode"));
        }
        if self.sender_id().is_none_or(str::is_empty) {
            return Err(ConfigurationError::missing("firebaseSenderId"));
        }

        if let Some(color) = &self.android_settings.notification_accent_color
            && ArgbColor::parse(color).is_none()
        {
            return Err(ConfigurationError::InvalidColor { value: color.clone() });
        }

        let mut seen = HashSet::new();
        for category in &self.notification_categories {
            if !seen.insert(category.identifier.as_str()) {
                return Err(ConfigurationError::DuplicateCategory {
                    identifier: category.identifier.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> Value {
        json!({
            "applicationCode": "abc123",
            "androidSettings": {
                "firebaseSenderId": "999",
                "notificationIcon": "ic_push",
                "multipleNotifications": true,
                "notificationAccentColor": "#FF0000"
            },
            "privacySettings": {
                "carrierInfoSendingDisabled": true
            },
            "defaultMessageStorage": true,
            "inAppChatEnabled": true,
            "notificationCategories": [
                {
                    "identifier": "promo",
                    "actions": [
                        {
                            "identifier": "OPEN",
                            "icon": "ic_open",
                            "title": "Open",
                            "foreground": true,
                            "moRequired": false
                        },
                        {
                            "identifier": "REPLY",
                            "icon": "ic_reply",
                            "title": "Reply",
                            "foreground": false,
                            "textInputPlaceholder": "Type here",
                            "moRequired": true
                        }
                    ]
                }
            ]
        })
    }

    #[test]
    fn test_parse_full_payload() {
        let config = Configuration::from_value(full_payload()).unwrap();

        assert_eq!(config.application_code, "abc123");
        assert_eq!(config.sender_id(), Some("999"));
        assert_eq!(config.android_settings.notification_icon.as_deref(), Some("ic_push"));
        assert!(config.android_settings.multiple_notifications);
        assert!(config.default_message_storage);
        assert!(config.in_app_chat_enabled);

        let privacy = config.privacy_settings.unwrap();
        assert!(privacy.carrier_info_sending_disabled);
        assert!(!privacy.user_data_persisting_disabled);
        assert!(!privacy.system_info_sending_disabled);

        let actions = &config.notification_categories[0].actions;
        assert_eq!(actions[0].identifier, "OPEN");
        assert_eq!(actions[0].text_input_placeholder, None);
        assert_eq!(actions[1].text_input_placeholder.as_deref(), Some("Type here"));
        assert!(actions[1].mo_required);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_minimal_payload_uses_defaults() {
        let config = Configuration::from_json(r#"{"applicationCode":"abc"}"#).unwrap();

        assert_eq!(config.privacy_settings, None);
        assert!(!config.default_message_storage);
        assert!(!config.in_app_chat_enabled);
        assert!(config.notification_categories.is_empty());
        assert_eq!(config.android_settings, AndroidSettings::default());
    }

    #[test]
    fn test_parse_rejects_broken_json() {
        let err = Configuration::from_json("{\"applicationCode\":").unwrap_err();
        assert!(matches!(err, ConfigurationError::Malformed(_)));
    }

    #[test]
    fn test_action_without_required_field_is_malformed() {
        let err = Configuration::from_value(json!({
            "applicationCode": "abc",
            "notificationCategories": [{"identifier": "c", "actions": [{"identifier": "a"}]}]
        }))
        .unwrap_err();
        assert!(matches!(err, ConfigurationError::Malformed(_)));
    }

    #[test]
    fn test_validate_missing_credentials() {
        let mut config = Configuration::from_value(full_payload()).unwrap();
        config.application_code.clear();
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::MissingCredential { field: "applicationCode" })
        ));

        let mut config = Configuration::from_value(full_payload()).unwrap();
        config.android_settings.firebase_sender_id = Some(String::new());
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::MissingCredential { field: "firebaseSenderId" })
        ));

        config.android_settings.firebase_sender_id = None;
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::MissingCredential { field: "firebaseSenderId" })
        ));
    }

    #[test]
    fn test_validate_invalid_color() {
        let mut config = Configuration::from_value(full_payload()).unwrap();
        config.android_settings.notification_accent_color = Some("#12".to_string());

        match config.validate() {
            Err(ConfigurationError::InvalidColor { value }) => assert_eq!(value, "#12"),
            other => panic!("expected InvalidColor, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_duplicate_category() {
        let mut config = Configuration::from_value(full_payload()).unwrap();
        let duplicate = config.notification_categories[0].clone();
        config.notification_categories.push(duplicate);

        match config.validate() {
            Err(ConfigurationError::DuplicateCategory { identifier }) => assert_eq!(identifier, "promo"),
            other => panic!("expected DuplicateCategory, got {other:?}"),
        }
    }
}
