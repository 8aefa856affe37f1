//! Resolved SDK initialization parameters
//!
//! One value built field by field by the resolver, then replayed onto the
//! SDK builder in a single pass.

use tracing::debug;

use crate::color::ArgbColor;
use crate::platform::{MessagingBuilder, ResourceId};

/// Required credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreParams {
    pub application_code: String,
    pub sender_id: String,
}

/// Data-collection opt-outs, all off by default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrivacyToggles {
    pub without_storing_user_data: bool,
    pub without_carrier_info: bool,
    pub without_system_info: bool,
}

impl PrivacyToggles {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Message store selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStore {
    /// SDK's bundled persistent (SQLite) store
    Default,
}

/// Notification display settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationSettings {
    /// Custom icon; None keeps the SDK default icon
    pub default_icon: Option<ResourceId>,
    pub multiple_notifications: bool,
    pub color: Option<ArgbColor>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkAction {
    pub id: String,
    pub icon: Option<ResourceId>,
    pub title: String,
    pub brings_app_to_foreground: bool,
    pub input_placeholder: Option<String>,
    pub mo_message: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkCategory {
    pub id: String,
    pub actions: Vec<SdkAction>,
}

/// Everything the SDK needs at initialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkConfiguration {
    pub core: CoreParams,
    pub privacy: PrivacyToggles,
    pub message_store: Option<MessageStore>,
    pub notification_settings: NotificationSettings,
    pub categories: Vec<SdkCategory>,
}

impl SdkConfiguration {
    /// Start from credentials with every optional part left at the SDK default
    pub fn new(core: CoreParams) -> Self {
        Self {
            core,
            privacy: PrivacyToggles::default(),
            message_store: None,
            notification_settings: NotificationSettings::default(),
            categories: Vec::new(),
        }
    }

    /// Replay onto the SDK builder
    /// Exactly one call per configured option, none for options left unset.
    pub fn apply_to<B: MessagingBuilder + ?Sized>(&self, builder: &mut B) {
        builder.with_application_code(&self.core.application_code);
        builder.with_sender_id(&self.core.sender_id);

        if self.privacy.without_storing_user_data {
            builder.without_storing_user_data();
        }
        if self.privacy.without_carrier_info {
            builder.without_carrier_info();
        }
        if self.privacy.without_system_info {
            builder.without_system_info();
        }

        if let Some(store) = self.message_store {
            builder.with_message_store(store);
        }

        builder.with_display_notification(&self.notification_settings);

        if !self.categories.is_empty() {
            builder.with_notification_categories(&self.categories);
        }

        debug!(
            application_code = %self.core.application_code,
            categories = self.categories.len(),
            "Applied configuration to SDK builder"
        );
    }
}
