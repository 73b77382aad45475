//! # Preview Error Types
//!
//! Lookups never fail; only loading the configuration can.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a [`crate::PreviewConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read preview configuration {}: {source}", .path.display())]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has mistyped keys.
    #[error("invalid preview configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
