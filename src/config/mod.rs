//! Configuration management for the messaging bridge
//!
//! The host hands over one JSON configuration at startup; it is parsed
//! into [`Configuration`] and never mutated afterwards.

pub mod configuration;

// Re-export commonly used types
pub use configuration::{
    AndroidSettings, Configuration, NotificationAction, NotificationCategory, PrivacySettings,
};
