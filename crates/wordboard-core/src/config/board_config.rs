//! Top-level wordboard configuration with layered resolution.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{defaults, DecayConfig, LimitsConfig, MalformedDecayPolicy, StorageConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`WORDBOARD_*`)
/// 3. Project config (`wordboard.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BoardConfig {
    pub decay: DecayConfig,
    pub limits: LimitsConfig,
    pub storage: StorageConfig,
}

/// Caller-supplied overrides, e.g. from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub db_path: Option<String>,
    pub decay_window_secs: Option<u64>,
    pub malformed_policy: Option<MalformedDecayPolicy>,
    /// Added to, not replacing, the configured privileged set.
    pub privileged: Vec<String>,
}

impl BoardConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let project_config_path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read one TOML file. Missing keys take their compiled defaults.
    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &BoardConfig) -> Result<(), ConfigError> {
        if config.decay.window_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "decay.window_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.limits.max_weight.is_nan() || config.limits.max_weight < 2.0 {
            return Err(ConfigError::ValidationFailed {
                field: "limits.max_weight".to_string(),
                message: "must be at least 2".to_string(),
            });
        }
        if config.limits.max_text_length == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "limits.max_text_length".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.storage.read_pool_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "storage.read_pool_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `WORDBOARD_DECAY_WINDOW_SECS`, `WORDBOARD_MAX_WEIGHT`, etc.
    /// Unparseable values are logged and skipped.
    fn apply_env_overrides(config: &mut BoardConfig) {
        if let Some(v) = env_parsed::<u64>("WORDBOARD_DECAY_WINDOW_SECS") {
            config.decay.window_secs = v;
        }
        if let Some(v) = env_parsed::<MalformedDecayPolicy>("WORDBOARD_DECAY_MALFORMED_POLICY") {
            config.decay.malformed_policy = v;
        }
        if let Some(v) = env_parsed::<usize>("WORDBOARD_MAX_WORDS_PER_CREATOR") {
            config.limits.max_words_per_creator = v;
        }
        if let Some(v) = env_parsed::<usize>("WORDBOARD_MAX_VOTES_PER_USER") {
            config.limits.max_votes_per_user = v;
        }
        if let Some(v) = env_parsed::<f64>("WORDBOARD_MAX_WEIGHT") {
            config.limits.max_weight = v;
        }
        if let Some(v) = env_parsed::<usize>("WORDBOARD_MAX_TEXT_LENGTH") {
            config.limits.max_text_length = v;
        }
        if let Some(v) = env_parsed::<usize>("WORDBOARD_MAX_DESCRIPTION_LENGTH") {
            config.limits.max_description_length = v;
        }
        if let Ok(val) = std::env::var("WORDBOARD_PRIVILEGED") {
            config.limits.privileged = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Ok(val) = std::env::var("WORDBOARD_DB_PATH") {
            config.storage.db_path = val;
        }
        if let Some(v) = env_parsed::<usize>("WORDBOARD_READ_POOL_SIZE") {
            config.storage.read_pool_size = v;
        }
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut BoardConfig, overrides: &ConfigOverrides) {
        if let Some(ref v) = overrides.db_path {
            config.storage.db_path = v.clone();
        }
        if let Some(v) = overrides.decay_window_secs {
            config.decay.window_secs = v;
        }
        if let Some(v) = overrides.malformed_policy {
            config.decay.malformed_policy = v;
        }
        config
            .limits
            .privileged
            .extend(overrides.privileged.iter().cloned());
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parsed<T>(key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(key, value = %raw, error = %e, "ignoring invalid environment override");
            None
        }
    }
}
