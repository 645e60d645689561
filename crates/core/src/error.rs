//! Configuration error model.

use thiserror::Error;

/// Result type used by configuration parsing.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// A configuration value could not be used.
///
/// None of these are fatal: callers log them and continue with the default
/// for the affected setting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A port value was not an integer in `0..=65535`.
    #[error("invalid port from {source_name}: {value:?}")]
    InvalidPort {
        source_name: &'static str,
        value: String,
    },

    /// A delay value was not a whole number of milliseconds.
    #[error("invalid delay from {source_name}: {value:?} (expected milliseconds)")]
    InvalidDelay {
        source_name: &'static str,
        value: String,
    },

    /// A switch value was not one of the recognised boolean spellings.
    #[error("invalid flag from {source_name}: {value:?} (expected true/false)")]
    InvalidFlag {
        source_name: &'static str,
        value: String,
    },
}

impl ConfigError {
    pub fn invalid_port(source_name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidPort {
            source_name,
            value: value.into(),
        }
    }

    pub fn invalid_delay(source_name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidDelay {
            source_name,
            value: value.into(),
        }
    }

    pub fn invalid_flag(source_name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidFlag {
            source_name,
            value: value.into(),
        }
    }

    /// Name of the configuration source that held the bad value.
    pub fn source_name(&self) -> &'static str {
        match self {
            Self::InvalidPort { source_name, .. }
            | Self::InvalidDelay { source_name, .. }
            | Self::InvalidFlag { source_name, .. } => source_name,
        }
    }
}
