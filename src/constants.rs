//! Application-wide constants
//!
//! Wire key names and resource kinds shared by the resolver and the codec.
//! These must match the external schema exactly.

/// Installation wire keys
pub mod installation {
    /// Push registration toggle
    pub const IS_PUSH_REGISTRATION_ENABLED: &str = "isPushRegistrationEnabled";

    /// Primary device flag
    pub const IS_PRIMARY_DEVICE: &str = "isPrimaryDevice";

    /// Custom attributes sub-map
    pub const CUSTOM_ATTRIBUTES: &str = "customAttributes";

    /// Book-keeping container leaked by the SDK serializer (never sent to clients)
    pub const INTERNAL_MAP: &str = "map";
}

/// Custom attribute wire shape
pub mod custom_attribute {
    /// Key holding the type tag
    pub const TYPE_KEY: &str = "type";

    /// Key holding the payload
    pub const VALUE_KEY: &str = "value";

    pub const TAG_STRING: &str = "String";
    pub const TAG_NUMBER: &str = "Number";
    pub const TAG_BOOLEAN: &str = "Boolean";
    pub const TAG_DATE: &str = "Date";
    pub const TAG_LIST: &str = "List";

    /// Date payload format (yyyy-MM-dd)
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Platform resource classes used for icon probing
pub mod resources {
    /// Image-asset class (launcher style icons)
    pub const KIND_MIPMAP: &str = "mipmap";

    pub const KIND_DRAWABLE: &str = "drawable";

    pub const KIND_RAW: &str = "raw";
}

/// Logging target used by every module in the crate
pub const LOG_TAG: &str = "MobileMessagingBridge";
