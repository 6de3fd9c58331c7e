//! Scroll configuration errors

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::ScrollSyncConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML could not be parsed into a config
    #[error("Failed to parse scroll config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field holds a value the manager cannot work with
    #[error("Invalid scroll config `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Result type for scroll configuration
pub type Result<T> = std::result::Result<T, ConfigError>;
