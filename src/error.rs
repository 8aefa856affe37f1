//! Error types for configuration resolution and installation conversion
//!
//! Structural problems (missing credentials, bad colors, null payloads) are
//! surfaced to the caller. Cosmetic problems are absorbed where they occur
//! and only logged, so they never show up here.

/// Errors raised while validating or resolving a [`crate::Configuration`]
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigurationError {
    #[error("missing required credential: {field}")]
    MissingCredential { field: &'static str },

    #[error("invalid color: {value:?}")]
    InvalidColor { value: String },

    #[error("duplicate notification category identifier: {identifier}")]
    DuplicateCategory { identifier: String },

    #[error("malformed configuration payload")]
    Malformed(#[from] serde_json::Error),
}

impl ConfigurationError {
    /// Convenience constructor for `MissingCredential`.
    pub fn missing(field: &'static str) -> Self {
        Self::MissingCredential { field }
    }
}

/// Errors raised while converting installations to and from JSON
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConversionError {
    #[error("cannot resolve installation from a null payload")]
    NullPayload,

    #[error("installation serializer did not produce a JSON object")]
    NotAnObject,

    #[error("installation serialization failed")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    CustomAttribute(#[from] CustomAttributeError),
}

/// Failure to map a single custom attribute between wire and domain shapes
///
/// Only the offending attribute is dropped; the rest of the map survives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CustomAttributeError {
    #[error("attribute {key:?} has no recognized type tag")]
    UnknownType { key: String },

    #[error("attribute {key:?} payload does not match type {tag}")]
    InvalidValue { key: String, tag: &'static str },
}
