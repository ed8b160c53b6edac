use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse type compatibility config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("`{field}` must be greater than zero")]
    InvalidLimit { field: &'static str },
}

/// Limits applied to a single compatibility query.
///
/// ```toml
/// max_depth = 512
/// max_iterations = 100000
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompatConfig {
    /// Maximum nesting of equality/assignability checks before the answer is indeterminate.
    #[serde(default = "CompatConfig::default_max_depth")]
    pub max_depth: u32,

    /// Maximum number of equality/assignability checks a single query may perform.
    #[serde(default = "CompatConfig::default_max_iterations")]
    pub max_iterations: u32,
}

impl Default for CompatConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::default_max_depth(),
            max_iterations: Self::default_max_iterations(),
        }
    }
}

impl CompatConfig {
    fn default_max_depth() -> u32 {
        512
    }

    fn default_max_iterations() -> u32 {
        100_000
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: CompatConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidLimit { field: "max_depth" });
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::InvalidLimit {
                field: "max_iterations",
            });
        }
        Ok(())
    }
}
