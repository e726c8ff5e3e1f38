//! Workload configuration, optionally loaded from `kvharness.toml`.
//!
//! Command-line flags override values read from the file.

use std::path::Path;

use kvharness_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default length of generated keys and values.
pub const DEFAULT_KEY_VALUE_LENGTH: usize = 10;

/// Conventional config file name.
pub const CONFIG_FILE_NAME: &str = "kvharness.toml";

/// Parameters of one generated workload.
///
/// # Example
///
/// ```toml
/// request_count = 1000
/// key_value_length = 10
/// # seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkloadConfig {
    /// Number of operations to generate.
    pub request_count: usize,
    /// Length of every generated key and value.
    #[serde(default = "default_key_value_length")]
    pub key_value_length: usize,
    /// Seed for the generator. A random seed is drawn when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_key_value_length() -> usize {
    DEFAULT_KEY_VALUE_LENGTH
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            request_count: 0,
            key_value_length: DEFAULT_KEY_VALUE_LENGTH,
            seed: None,
        }
    }
}

impl WorkloadConfig {
    /// Config for `request_count` operations with default length and no seed.
    pub fn new(request_count: usize) -> Self {
        Self {
            request_count,
            ..Self::default()
        }
    }

    /// Set the key/value length.
    pub fn with_key_value_length(mut self, key_value_length: usize) -> Self {
        self.key_value_length = key_value_length;
        self
    }

    /// Fix the generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the configuration can produce a workload.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `key_value_length` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.key_value_length == 0 {
            return Err(Error::invalid_configuration(
                "key_value_length must be a positive integer",
            ));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# kvharness workload configuration
#
# Number of operations to generate (required).
request_count = 1000

# Length of generated keys and values (default: 10).
key_value_length = 10

# Fixed seed for reproducible workloads. Omit to draw a random seed;
# the chosen seed is logged at info level.
# seed = 42
"#
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: WorkloadConfig = toml::from_str(content)
            .map_err(|e| Error::invalid_configuration(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate config from a file path.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::invalid_configuration(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::InvalidConfiguration { reason } => Error::invalid_configuration(format!(
                "{} ({})",
                reason,
                path.display()
            )),
            other => other,
        })
    }
}
