//! Configuration for batch derivation.

use std::{fs, path::Path};

use serde::Deserialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::BatchError;

/// Number of worker threads used when the config does not set one.
pub const DEFAULT_NUM_THREADS: usize = 4;

/// A set of keys to derive in one go, usually loaded from a TOML file:
///
/// ```toml
/// num_threads = 2
///
/// [[keys]]
/// label = "cold"
/// mnemonic = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
/// passphrase = "hunter2"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchConfig {
    /// The number of worker threads.
    ///
    /// Default is [`DEFAULT_NUM_THREADS`].
    pub num_threads: Option<usize>,

    /// The keys to derive, in output order.
    #[serde(default)]
    pub keys: Vec<KeyRequest>,
}

impl BatchConfig {
    /// Parses a batch config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, BatchError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a batch config file.
    pub fn load(path: &Path) -> Result<Self, BatchError> {
        let text = fs::read_to_string(path).map_err(|source| BatchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Worker thread count after applying the default.
    pub fn num_threads(&self) -> usize {
        self.num_threads.unwrap_or(DEFAULT_NUM_THREADS)
    }
}

/// One key to derive.
#[derive(Clone, PartialEq, Eq, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(deny_unknown_fields)]
pub struct KeyRequest {
    /// Name reported alongside the result, not secret.
    pub label: String,

    /// The mnemonic phrase.
    pub mnemonic: String,

    /// Optional passphrase, empty when absent.
    #[serde(default)]
    pub passphrase: String,
}

impl std::fmt::Debug for KeyRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyRequest")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config = BatchConfig::from_toml_str(
            r#"
            num_threads = 2

            [[keys]]
            label = "cold"
            mnemonic = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
            passphrase = "hunter2"

            [[keys]]
            label = "hot"
            mnemonic = "legal winner thank year wave sausage worth useful legal winner thank yellow"
            "#,
        )
        .unwrap();

        assert_eq!(config.num_threads(), 2);
        assert_eq!(config.keys.len(), 2);
        assert_eq!(config.keys[0].passphrase, "hunter2");
        assert_eq!(config.keys[1].label, "hot");
        assert!(config.keys[1].passphrase.is_empty());
    }

    #[test]
    fn defaults_apply() {
        let config = BatchConfig::from_toml_str("").unwrap();
        assert_eq!(config.num_threads(), DEFAULT_NUM_THREADS);
        assert!(config.keys.is_empty());
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = BatchConfig::from_toml_str("workers = 3").unwrap_err();
        assert!(matches!(err, BatchError::Config(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = BatchConfig::load(Path::new("/nonexistent/batch.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/batch.toml"));
    }

    #[test]
    fn debug_hides_secrets() {
        let request = KeyRequest {
            label: "cold".to_string(),
            mnemonic: "abandon about".to_string(),
            passphrase: "hunter2".to_string(),
        };
        let rendered = format!("{request:?}");

        assert!(rendered.contains("cold"));
        assert!(!rendered.contains("abandon"));
        assert!(!rendered.contains("hunter2"));
    }
}
