//! # Preview Configuration
//!
//! Loaded once from TOML. Every key is optional:
//!
//! ```toml
//! default_row_size = 9
//! merging_strategy = "merge"   # separate | merge | ignore
//! short_item_counts = false
//! ```
//!
//! Values are never rejected. A non-positive row size falls back to
//! [`FALLBACK_ROW_SIZE`].

use std::path::Path;

use peekbox_core::MergingStrategy;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Row size used when neither the container nor the configuration gives a
/// usable one.
pub const FALLBACK_ROW_SIZE: usize = 9;

/// User-facing preview options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Slots per row in compact mode, and in full mode when the container
    /// declares none.
    pub default_row_size: i32,
    /// How stacks with differing attributes are grouped.
    pub merging_strategy: MergingStrategy,
    /// Abbreviate large counts in compact mode (`12345` -> `12K`).
    pub short_item_counts: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            default_row_size: 9,
            merging_strategy: MergingStrategy::default(),
            short_item_counts: false,
        }
    }
}

impl PreviewConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML or mistyped keys.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its content is invalid.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "preview configuration loaded");
        Ok(config)
    }

    /// Row size of compact previews. Always at least 1.
    #[must_use]
    pub fn compact_row_size(&self) -> usize {
        match usize::try_from(self.default_row_size) {
            Ok(size) if size > 0 => size,
            _ => {
                tracing::warn!(
                    default_row_size = self.default_row_size,
                    fallback = FALLBACK_ROW_SIZE,
                    "non-positive default row size"
                );
                FALLBACK_ROW_SIZE
            }
        }
    }

    /// Row size of full previews for a container declaring `declared`
    /// slots per row. Always at least 1.
    #[must_use]
    pub fn full_row_size(&self, declared: i32) -> usize {
        match usize::try_from(declared) {
            Ok(size) if size > 0 => size,
            _ => self.compact_row_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PreviewConfig::default();

        assert_eq!(config.default_row_size, 9);
        assert_eq!(config.merging_strategy, MergingStrategy::Merge);
        assert!(!config.short_item_counts);
    }

    #[test]
    fn test_parse_full() {
        let config = PreviewConfig::from_toml_str(
            "default_row_size = 12\nmerging_strategy = \"ignore\"\nshort_item_counts = true\n",
        )
        .unwrap();

        assert_eq!(config.default_row_size, 12);
        assert_eq!(config.merging_strategy, MergingStrategy::Ignore);
        assert!(config.short_item_counts);
    }

    #[test]
    fn test_parse_partial_and_empty() {
        let config = PreviewConfig::from_toml_str("merging_strategy = \"separate\"").unwrap();
        assert_eq!(config.merging_strategy, MergingStrategy::Separate);
        assert_eq!(config.default_row_size, 9);

        assert_eq!(PreviewConfig::from_toml_str("").unwrap(), PreviewConfig::default());
    }

    #[test]
    fn test_parse_rejects_unknown_strategy() {
        let result = PreviewConfig::from_toml_str("merging_strategy = \"smash\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_row_size_fallbacks() {
        let mut config = PreviewConfig::default();
        assert_eq!(config.full_row_size(0), 9);
        assert_eq!(config.full_row_size(-3), 9);
        assert_eq!(config.full_row_size(5), 5);

        config.default_row_size = 4;
        assert_eq!(config.compact_row_size(), 4);
        assert_eq!(config.full_row_size(0), 4);

        config.default_row_size = 0;
        assert_eq!(config.compact_row_size(), FALLBACK_ROW_SIZE);
        assert_eq!(config.full_row_size(0), FALLBACK_ROW_SIZE);

        config.default_row_size = -7;
        assert_eq!(config.compact_row_size(), FALLBACK_ROW_SIZE);
    }

    #[test]
    fn test_load_missing_file() {
        let result = PreviewConfig::load("/definitely/not/here/peekbox.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_file() {
        let path = std::env::temp_dir().join(format!("peekbox_config_{}.toml", std::process::id()));
        std::fs::write(&path, "default_row_size = 3\nshort_item_counts = true\n").unwrap();

        let config = PreviewConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.default_row_size, 3);
        assert!(config.short_item_counts);
        assert_eq!(config.merging_strategy, MergingStrategy::Merge);
    }
}
