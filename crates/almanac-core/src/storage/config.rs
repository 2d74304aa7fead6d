//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Day-cycle strategy (accurate anchor or approximate formula)
//! - Range query limits
//! - Defaults for birth-profile fields the CLI does not require
//!
//! Configuration is stored at `~/.config/almanac/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::config_dir;
use crate::birth::Gender;
use crate::error::{ConfigError, Result};
use crate::range::{DEFAULT_MAX_SPAN_DAYS, DEFAULT_RESULT_LIMIT};
use crate::sexagenary::AnchorStrategy;

/// Day-cycle configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClockConfig {
    #[serde(default)]
    pub strategy: AnchorStrategy,
}

/// Range query configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeConfig {
    #[serde(default = "default_max_span_days")]
    pub max_span_days: u32,
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
}

/// Birth-profile defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_location")]
    pub default_location: String,
    #[serde(default = "default_gender")]
    pub default_gender: Gender,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/almanac/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub range: RangeConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

// Default functions
fn default_max_span_days() -> u32 {
    DEFAULT_MAX_SPAN_DAYS
}
fn default_result_limit() -> usize {
    DEFAULT_RESULT_LIMIT
}
fn default_location() -> String {
    "北京".into()
}
fn default_gender() -> Gender {
    Gender::Male
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            max_span_days: default_max_span_days(),
            result_limit: default_result_limit(),
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            default_location: default_location(),
            default_gender: default_gender(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(ConfigError::UnknownKey(key.to_string()));
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

                let new_value = match existing {
                    serde_json::Value::Number(_) => value
                        .parse::<u64>()
                        .map(|n| serde_json::Value::Number(n.into()))
                        .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?,
                    serde_json::Value::Object(_) => {
                        return Err(ConfigError::UnknownKey(key.to_string()));
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }

        Err(ConfigError::UnknownKey(key.to_string()))
    }

    /// Path of the config file in the resolved config directory.
    pub fn path() -> Result<PathBuf> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from a specific file, writing defaults there if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, writing defaults");
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(err) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
            .into()),
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| save_failed(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(_) => None,
            other => Some(other.to_string()),
        }
    }

    /// All leaf keys with their values, sorted by key.
    pub fn entries(&self) -> Vec<(String, String)> {
        fn walk(prefix: &str, value: &serde_json::Value, out: &mut Vec<(String, String)>) {
            match value {
                serde_json::Value::Object(map) => {
                    for (k, v) in map {
                        let key = if prefix.is_empty() {
                            k.clone()
                        } else {
                            format!("{prefix}.{k}")
                        };
                        walk(&key, v, out);
                    }
                }
                serde_json::Value::String(s) => out.push((prefix.to_string(), s.clone())),
                other => out.push((prefix.to_string(), other.to_string())),
            }
        }

        let mut out = Vec::new();
        if let Ok(json) = serde_json::to_value(self) {
            walk("", &json, &mut out);
        }
        out
    }

    /// Update a value in memory by dot-separated key.
    ///
    /// # Errors
    ///
    /// `UnknownKey` for keys that do not name a leaf setting, `InvalidValue`
    /// when the value does not fit the setting's type or range.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Set a config value by key and persist. Returns error if key is unknown.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.apply(key, value)?;
        self.save()
    }

    /// Overwrite the stored config with defaults.
    pub fn reset() -> Result<Self> {
        let cfg = Self::default();
        cfg.save()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.range.max_span_days == 0 {
            return Err(ConfigError::InvalidValue {
                key: "range.max_span_days".into(),
                message: "must be at least 1".into(),
            });
        }
        if self.range.result_limit == 0 {
            return Err(ConfigError::InvalidValue {
                key: "range.result_limit".into(),
                message: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
