//! Installation ↔ JSON wire form
//!
//! Strict where the caller needs it (`decode_required`), best effort
//! everywhere else: encode failures degrade to an empty object, decode
//! failures keep whatever fields were assigned before the failure.

use anyhow::Context;
use serde_json::{Map, Value};
use tracing::{debug, error, warn};

use crate::constants::installation::*;
use crate::error::ConversionError;
use crate::installation::Installation;
use crate::installation::custom_attributes;

/// SDK-native JSON serialization of an installation
pub trait InstallationSerializer {
    fn to_json(&self, installation: &Installation) -> Result<String, ConversionError>;
}

/// Serializer used by the SDK itself (emits the internal `map` container)
#[derive(Debug, Clone, Copy, Default)]
pub struct SdkInstallationSerializer;

impl InstallationSerializer for SdkInstallationSerializer {
    fn to_json(&self, installation: &Installation) -> Result<String, ConversionError> {
        Ok(serde_json::to_string(installation)?)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InstallationCodec<S = SdkInstallationSerializer> {
    serializer: S,
}

impl InstallationCodec {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: InstallationSerializer> InstallationCodec<S> {
    pub fn with_serializer(serializer: S) -> Self {
        Self { serializer }
    }

    /// Encode one installation, degrading to an empty object on failure
    pub fn encode(&self, installation: &Installation) -> Map<String, Value> {
        self.try_encode(installation).unwrap_or_else(|e| {
            error!(error = %e, "Failed to encode installation, returning empty object");
            Map::new()
        })
    }

    /// Encode one installation, surfacing the failure
    pub fn try_encode(&self, installation: &Installation) -> Result<Map<String, Value>, ConversionError> {
        let json = self.serializer.to_json(installation)?;
        let Value::Object(mut object) = serde_json::from_str::<Value>(&json)? else {
            return Err(ConversionError::NotAnObject);
        };

        object.remove(INTERNAL_MAP);

        let attributes = installation.custom_attributes();
        if !attributes.is_empty() && object.contains_key(CUSTOM_ATTRIBUTES) {
            let tagged = custom_attributes::to_backend(attributes)?;
            object.insert(CUSTOM_ATTRIBUTES.to_string(), Value::Object(tagged));
        }

        Ok(object)
    }

    /// `None` in, `None` out; an empty slice gives an empty array
    pub fn encode_list(&self, installations: Option<&[Installation]>) -> Option<Vec<Value>> {
        let installations = installations?;
        Some(
            installations
                .iter()
                .map(|installation| Value::Object(self.encode(installation)))
                .collect(),
        )
    }

    /// Always an array; installations that fail to encode are left out
    pub fn encode_array(&self, installations: &[Installation]) -> Vec<Value> {
        installations
            .iter()
            .enumerate()
            .filter_map(|(index, installation)| match self.try_encode(installation) {
                Ok(object) => Some(Value::Object(object)),
                Err(e) => {
                    warn!(index = index, error = %e, "Skipping installation that failed to encode");
                    None
                }
            })
            .collect()
    }

    /// Decode leniently
    /// Never fails: fields assigned before an error stay assigned.
    pub fn decode(&self, json: &Value) -> Installation {
        let mut installation = Installation::new();
        if let Err(e) = decode_into(json, &mut installation) {
            warn!(error = ?e, "Installation decoded partially");
        }
        installation
    }

    /// Decode a payload that must be present
    pub fn decode_required(&self, json: Option<&Value>) -> Result<Installation, ConversionError> {
        match json {
            None | Some(Value::Null) => Err(ConversionError::NullPayload),
            Some(json) => Ok(self.decode(json)),
        }
    }
}

fn decode_into(json: &Value, installation: &mut Installation) -> anyhow::Result<()> {
    let object = json
        .as_object()
        .context("installation payload is not a JSON object")?;

    if let Some(value) = object.get(IS_PUSH_REGISTRATION_ENABLED) {
        installation.set_push_registration_enabled(lenient_bool(value));
    }
    if let Some(value) = object.get(IS_PRIMARY_DEVICE) {
        installation.set_primary_device(lenient_bool(value));
    }
    if let Some(value) = object.get(CUSTOM_ATTRIBUTES) {
        let raw = generic_object(value).context("customAttributes is not a JSON object")?;
        let attributes = custom_attributes::from_backend(&raw);
        debug!(received = raw.len(), kept = attributes.len(), "Decoded custom attributes");
        installation.set_custom_attributes(attributes);
    }

    Ok(())
}

/// `true` or a case-insensitive `"true"` string; anything else is `false`
fn lenient_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Accepts an object or a string holding a serialized object
fn generic_object(value: &Value) -> Result<Map<String, Value>, serde_json::Error> {
    match value {
        Value::String(text) => serde_json::from_str(text),
        other => serde_json::from_value(other.clone()),
    }
}
