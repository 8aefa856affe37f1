//! Host entry point for SDK initialization

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Configuration;
use crate::platform::{MessagingBuilder, PlatformContext};
use crate::resolver::ConfigurationResolver;
use crate::sdk::SdkConfiguration;

/// Parse the host configuration, resolve it and hand it to the SDK builder
/// The host UI is marked as foreground once the builder has been populated.
pub fn initialize<P, B>(config_json: &str, platform: &P, builder: &mut B) -> Result<SdkConfiguration>
where
    P: PlatformContext + ?Sized,
    B: MessagingBuilder + ?Sized,
{
    let config = Configuration::from_json(config_json).context("Failed to parse messaging configuration")?;
    let resolver = ConfigurationResolver::new(&config, platform);

    let resolved = resolver
        .resolve()
        .with_context(|| format!("Failed to resolve configuration for application {:?}", config.application_code))?;
    resolved.apply_to(builder);
    resolver.mark_foreground();

    info!(application_code = %resolved.core.application_code, "Messaging SDK configured");
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigurationError;
    use crate::platform::testing::{BuilderCall, FakeMonitor, FakePlatform, RecordingBuilder};

    #[test]
    fn test_initialize_populates_builder_and_marks_foreground() {
        let platform = FakePlatform {
            monitor: Some(FakeMonitor::default()),
            ..FakePlatform::default()
        };
        let mut builder = RecordingBuilder::default();
        let json = r#"{
            "applicationCode": "abc123",
            "androidSettings": {"firebaseSenderId": "999"},
            "privacySettings": {"systemInfoSendingDisabled": true},
            "inAppChatEnabled": true
        }"#;

        let resolved = initialize(json, &platform, &mut builder).unwrap();

        assert_eq!(resolved.core.sender_id, "999");
        assert_eq!(builder.privacy_calls(), vec![&BuilderCall::WithoutSystemInfo]);
        assert_eq!(platform.chat_activations.get(), 1);
        assert_eq!(platform.monitor.as_ref().unwrap().resumed.get(), 1);
    }

    #[test]
    fn test_initialize_missing_sender_leaves_builder_untouched() {
        let platform = FakePlatform::default();
        let mut builder = RecordingBuilder::default();

        let err = initialize(r#"{"applicationCode": "abc123"}"#, &platform, &mut builder).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ConfigurationError>(),
            Some(ConfigurationError::MissingCredential { field: "firebaseSenderId" })
        ));
        assert!(builder.calls.is_empty());
    }

    #[test]
    fn test_initialize_malformed_json() {
        let platform = FakePlatform::default();
        let mut builder = RecordingBuilder::default();

        let err = initialize("not json", &platform, &mut builder).unwrap_err();

        assert!(matches!(err.downcast_ref::<ConfigurationError>(), Some(ConfigurationError::Malformed(_))));
    }
}
