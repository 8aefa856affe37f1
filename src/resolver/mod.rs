//! Configuration → SDK initialization parameters
//!
//! Every optional setting that is present maps to exactly one field of
//! [`SdkConfiguration`]; absent settings leave the SDK default untouched.

use tracing::{debug, info, warn};

use crate::color::ArgbColor;
use crate::config::Configuration;
use crate::error::ConfigurationError;
use crate::platform::PlatformContext;
use crate::sdk::{CoreParams, MessageStore, NotificationSettings, SdkCategory, SdkConfiguration};

pub mod categories;
pub mod resources;

pub use categories::{resolve_actions, resolve_categories};
pub use resources::resolve_resource;

/// Resolves one configuration against one platform context
pub struct ConfigurationResolver<'a, P: ?Sized> {
    config: &'a Configuration,
    platform: &'a P,
}

impl<'a, P> ConfigurationResolver<'a, P>
where
    P: PlatformContext + ?Sized,
{
    pub fn new(config: &'a Configuration, platform: &'a P) -> Self {
        Self { config, platform }
    }

    /// Resolve the full SDK configuration
    /// Validation runs first so nothing side-effecting happens on a bad config.
    pub fn resolve(&self) -> Result<SdkConfiguration, ConfigurationError> {
        self.config.validate()?;

        let mut resolved = SdkConfiguration::new(self.resolve_core()?);
        self.apply_privacy(&mut resolved);
        self.apply_message_storage(&mut resolved);
        resolved.notification_settings = self.resolve_notification_settings()?;
        resolved.categories = self.resolve_categories();

        self.activate_in_app_chat_if_enabled();

        info!(
            application_code = %resolved.core.application_code,
            privacy = ?resolved.privacy,
            categories = resolved.categories.len(),
            "Resolved SDK configuration"
        );
        Ok(resolved)
    }

    pub fn resolve_core(&self) -> Result<CoreParams, ConfigurationError> {
        let application_code = self.config.application_code.as_str();
        if application_code.is_empty() {
            return Err(ConfigurationError::missing("applicationCode"));
        }
        let sender_id = match self.config.sender_id() {
            Some(id) if !id.is_empty() => id,
            _ => return Err(ConfigurationError::missing("firebaseSenderId")),
        };

        debug!(application_code = %application_code, sender_id = %sender_id, "Resolved credentials");
        Ok(CoreParams {
            application_code: application_code.to_string(),
            sender_id: sender_id.to_string(),
        })
    }

    /// Flags are independent; any subset may be set
    pub fn apply_privacy(&self, target: &mut SdkConfiguration) {
        let Some(privacy) = &self.config.privacy_settings else {
            return;
        };

        if privacy.user_data_persisting_disabled {
            target.privacy.without_storing_user_data = true;
        }
        if privacy.carrier_info_sending_disabled {
            target.privacy.without_carrier_info = true;
        }
        if privacy.system_info_sending_disabled {
            target.privacy.without_system_info = true;
        }
    }

    pub fn apply_message_storage(&self, target: &mut SdkConfiguration) {
        if self.config.default_message_storage {
            target.message_store = Some(MessageStore::Default);
        }
    }

    pub fn resolve_notification_settings(&self) -> Result<NotificationSettings, ConfigurationError> {
        let android = &self.config.android_settings;
        let mut settings = NotificationSettings::default();

        if let Some(icon) = &android.notification_icon {
            settings.default_icon = resolve_resource(self.platform, icon);
        }

        if android.multiple_notifications {
            settings.multiple_notifications = true;
        }

        if let Some(color) = &android.notification_accent_color {
            let parsed = ArgbColor::parse(color)
                .ok_or_else(|| ConfigurationError::InvalidColor { value: color.clone() })?;
            settings.color = Some(parsed);
        }

        Ok(settings)
    }

    pub fn resolve_categories(&self) -> Vec<SdkCategory> {
        resolve_categories(&self.config.notification_categories, self.platform)
    }

    pub fn activate_in_app_chat_if_enabled(&self) {
        if self.config.in_app_chat_enabled {
            info!("Activating in-app chat");
            self.platform.activate_in_app_chat();
        }
    }

    /// Notify the SDK that the host UI came to the foreground
    /// Callers must not invoke this more than once per foreground transition.
    pub fn mark_foreground(&self) {
        match self.platform.lifecycle_monitor() {
            Some(monitor) => monitor.on_activity_resumed(),
            None => warn!("Activity lifecycle monitor not available, skipping foreground notification"),
        }
    }
}
