//! Store configuration.
//!
//! `#[serde(default)]` uses `Default::default()` for missing fields,
//! keeping config files backward-compatible.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main store configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Counter demo settings
    pub counter: CounterConfig,

    /// Profile card defaults
    pub profile: ProfileConfig,

    /// Optional JSON catalog file; the built-in seed is used when absent
    pub catalog_path: Option<PathBuf>,
}

impl StoreConfig {
    /// Loads config from the default location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from_default_path().unwrap_or_default()
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads from the default config path.
    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("storefront").join("config.toml"))
    }

    /// Saves the config to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::default_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

/// Counter demo configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Value at which the derived status flips to "Too much!"
    pub threshold: i64,

    /// Delay before an over-threshold counter resets to zero (ms)
    pub reset_delay_ms: u64,
}

impl CounterConfig {
    /// Returns the reset delay as a `Duration`.
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            threshold: 37,
            reset_delay_ms: 5000,
        }
    }
}

/// Profile card defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Name shown on the greeting card
    pub name: String,

    /// Age shown on the greeting card
    pub age: u8,

    /// Avatar image URL
    pub avatar_url: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Evan".to_string(),
            age: 25,
            avatar_url: "https://example.com/img/avatar.png".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.counter.threshold, 37);
        assert_eq!(config.counter.reset_delay(), Duration::from_millis(5000));
        assert_eq!(config.profile.name, "Evan");
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = StoreConfig::default();
        let toml = toml::to_string(&config).unwrap();
        let parsed: StoreConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.counter.threshold, config.counter.threshold);
    }

    #[test]
    fn test_load_from_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[counter]\nthreshold = 50\n").unwrap();

        let config = StoreConfig::load_from(file.path()).unwrap();
        assert_eq!(config.counter.threshold, 50);
        // Missing fields fall back to defaults.
        assert_eq!(config.counter.reset_delay_ms, 5000);
        assert_eq!(config.profile.age, 25);
    }
}
