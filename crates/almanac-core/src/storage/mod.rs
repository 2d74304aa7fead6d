mod config;

pub use config::{ClockConfig, Config, ProfileConfig, RangeConfig};

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Overrides the config directory outright.
pub const CONFIG_DIR_ENV: &str = "ALMANAC_CONFIG_DIR";

/// `dev` selects the development config directory.
pub const ENV_VAR: &str = "ALMANAC_ENV";

/// Returns `~/.config/almanac[-dev]/` based on ALMANAC_ENV, or
/// ALMANAC_CONFIG_DIR when set.
///
/// Set ALMANAC_ENV=dev to use development config directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn config_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .ok_or(ConfigError::NoConfigDir)?
                .join(".config");

            let env = std::env::var(ENV_VAR).unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("almanac-dev")
            } else {
                base_dir.join("almanac")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
