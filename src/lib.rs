//! Bridge between host configuration / JSON payloads and the mobile
//! messaging SDK object model.
//!
//! - [`ConfigurationResolver`] turns a [`Configuration`] into SDK initialization parameters
//! - [`InstallationCodec`] converts [`Installation`] records to and from their JSON wire form

#![forbid(unsafe_code)]

pub mod bridge;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod installation;
pub mod platform;
pub mod resolver;
pub mod sdk;

use anyhow::Result;
use tracing::Level as TraceLevel;
use tracing_subscriber::FmtSubscriber;

pub use config::Configuration;
pub use error::{ConfigurationError, ConversionError, CustomAttributeError};
pub use installation::{CustomAttributeValue, Installation, InstallationCodec};
pub use resolver::ConfigurationResolver;
pub use sdk::SdkConfiguration;

/// Map a level name to a tracing level (unknown names fall back to info)
pub fn parse_log_level(level: &str) -> TraceLevel {
    match level.to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    }
}

/// Install a global fmt subscriber for hosts without their own
/// Fails if a global subscriber is already set.
pub fn init_logging(level: &str) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_log_level(level))
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    tracing::debug!(target: constants::LOG_TAG, level = %level, "Logging initialized");
    Ok(())
}
