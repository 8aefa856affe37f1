//! Seams to the host platform and the messaging SDK
//!
//! Everything here is implemented outside this crate. The resolver only
//! ever talks to the platform and the SDK through these traits.

use std::fmt;

use crate::constants::resources;
use crate::sdk::{MessageStore, NotificationSettings, SdkCategory};

/// Opaque platform resource identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceId(pub u32);

/// Resource classes probed when resolving an icon name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Image assets
    Mipmap,
    Drawable,
    Raw,
}

impl ResourceKind {
    /// Fixed probe order: first match wins
    pub const PROBE_ORDER: [ResourceKind; 3] = [Self::Mipmap, Self::Drawable, Self::Raw];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mipmap => resources::KIND_MIPMAP,
            Self::Drawable => resources::KIND_DRAWABLE,
            Self::Raw => resources::KIND_RAW,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only catalog of packaged resources
pub trait ResourceCatalog {
    fn lookup(&self, name: &str, kind: ResourceKind, package: &str) -> Option<ResourceId>;
}

/// Receives foreground transitions of the host UI
pub trait ActivityLifecycleMonitor {
    fn on_activity_resumed(&self);
}

/// Application context handed to the resolver
pub trait PlatformContext {
    /// Package scope used for resource lookups
    fn package_name(&self) -> &str;

    fn resources(&self) -> &dyn ResourceCatalog;

    /// Activate in-app chat; the SDK makes repeated activation a no-op
    fn activate_in_app_chat(&self);

    /// SDK lifecycle monitor, absent until the SDK core is up
    fn lifecycle_monitor(&self) -> Option<&dyn ActivityLifecycleMonitor>;
}

/// Builder surface exposed by the messaging SDK
pub trait MessagingBuilder {
    fn with_application_code(&mut self, code: &str);
    fn with_sender_id(&mut self, sender_id: &str);
    fn without_storing_user_data(&mut self);
    fn without_carrier_info(&mut self);
    fn without_system_info(&mut self);
    fn with_message_store(&mut self, store: MessageStore);
    fn with_display_notification(&mut self, settings: &NotificationSettings);
    fn with_notification_categories(&mut self, categories: &[SdkCategory]);
}
