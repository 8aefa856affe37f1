//! Device registration record and its JSON boundary
//!
//! [`Installation`] mirrors the SDK's record of one device registration.
//! Setters also record the assigned value in an internal change map that
//! the SDK uses for partial updates; the SDK serializer emits that map as
//! `map`, and [`InstallationCodec`] strips it before anything hits the wire.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::constants::installation::*;

pub mod codec;
pub mod custom_attributes;

pub use codec::{InstallationCodec, InstallationSerializer, SdkInstallationSerializer};
pub use custom_attributes::{CustomAttributeValue, CustomAttributes};

/// SDK-managed installation fields, passed through the codec untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_registration_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdk_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_secure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_timezone_offset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_service_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_service_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Installation {
    #[serde(flatten)]
    pub details: InstallationDetails,

    #[serde(rename = "isPushRegistrationEnabled", skip_serializing_if = "Option::is_none")]
    push_registration_enabled: Option<bool>,

    #[serde(rename = "isPrimaryDevice", skip_serializing_if = "Option::is_none")]
    primary_device: Option<bool>,

    #[serde(rename = "customAttributes", skip_serializing_if = "BTreeMap::is_empty")]
    custom_attributes: CustomAttributes,

    // Explicitly assigned fields, keyed by wire name
    #[serde(rename = "map")]
    changes: BTreeMap<String, Value>,
}

impl Installation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_registration_enabled(&self) -> Option<bool> {
        self.push_registration_enabled
    }

    pub fn set_push_registration_enabled(&mut self, enabled: bool) {
        self.push_registration_enabled = Some(enabled);
        self.changes.insert(IS_PUSH_REGISTRATION_ENABLED.to_string(), Value::Bool(enabled));
    }

    pub fn primary_device(&self) -> Option<bool> {
        self.primary_device
    }

    pub fn set_primary_device(&mut self, primary: bool) {
        self.primary_device = Some(primary);
        self.changes.insert(IS_PRIMARY_DEVICE.to_string(), Value::Bool(primary));
    }

    pub fn custom_attributes(&self) -> &CustomAttributes {
        &self.custom_attributes
    }

    pub fn set_custom_attributes(&mut self, attributes: CustomAttributes) {
        self.custom_attributes = attributes;
        self.record_custom_attributes();
    }

    pub fn set_custom_attribute(&mut self, key: impl Into<String>, value: impl Into<CustomAttributeValue>) {
        self.custom_attributes.insert(key.into(), value.into());
        self.record_custom_attributes();
    }

    /// Wire names of fields assigned since construction
    pub fn changed_fields(&self) -> impl Iterator<Item = &str> {
        self.changes.keys().map(String::as_str)
    }

    fn record_custom_attributes(&mut self) {
        let snapshot = serde_json::to_value(&self.custom_attributes).unwrap_or(Value::Null);
        self.changes.insert(CUSTOM_ATTRIBUTES.to_string(), snapshot);
    }
}
