//! Configuration management for AgroHub

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cache::{CacheCapacity, CacheTtl};
use crate::error::ConfigError;
use crate::session::Session;
use crate::transport::DEFAULT_TIMEOUT_SECS;

type ConfigResult<T> = std::result::Result<T, ConfigError>;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_WEATHER_URL: &str = "https://api.weatherapi.com/v1";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// AgroHub backend base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub weather: WeatherConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    /// Tokens from the last login
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherConfig {
    #[serde(default = "default_weather_url")]
    pub base_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Per-repository cache sizing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "CacheSettings::users")]
    pub users: CacheSettings,

    #[serde(default = "CacheSettings::feed")]
    pub feed: CacheSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSettings {
    pub max_entries: usize,
    pub ttl_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_weather_url() -> String {
    DEFAULT_WEATHER_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl CacheSettings {
    fn users() -> Self {
        Self {
            max_entries: CacheCapacity::USERS.get(),
            ttl_secs: CacheTtl::USERS.as_secs(),
        }
    }

    fn feed() -> Self {
        Self {
            max_entries: CacheCapacity::FEED.get(),
            ttl_secs: CacheTtl::FEED.as_secs(),
        }
    }

    /// Capacity and TTL, or an error when either is zero.
    pub fn limits(&self, name: &str) -> ConfigResult<(NonZeroUsize, Duration)> {
        let capacity = NonZeroUsize::new(self.max_entries).ok_or_else(|| {
            ConfigError::Invalid(format!("cache.{name}.max_entries must be greater than 0"))
        })?;
        if self.ttl_secs == 0 {
            return Err(ConfigError::Invalid(format!(
                "cache.{name}.ttl_secs must be greater than 0"
            )));
        }
        Ok((capacity, Duration::from_secs(self.ttl_secs)))
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_url(),
            api_key: None,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            users: CacheSettings::users(),
            feed: CacheSettings::feed(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            weather: WeatherConfig::default(),
            cache: CacheConfig::default(),
            session: None,
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> ConfigResult<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHome)?;
        Ok(home.join(".agrohub").join("config.yaml"))
    }

    /// `path` if given, otherwise the default path
    pub fn resolve_path(path: Option<&Path>) -> ConfigResult<PathBuf> {
        match path {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_at(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Load configuration from a file that must exist
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(path, contents)?;

        // Tokens live here, so keep the file private
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("base_url must not be empty".to_string()));
        }
        if self.weather.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "weather.base_url must not be empty".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        self.cache.users.limits("users")?;
        self.cache.feed.limits("feed")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.weather.base_url, DEFAULT_WEATHER_URL);
        assert_eq!(config.cache.users.max_entries, 100);
        assert_eq!(config.cache.users.ttl_secs, 300);
        assert_eq!(config.cache.feed.max_entries, 10);
        assert_eq!(config.cache.feed.ttl_secs, 120);
        assert!(config.session.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = tempdir().unwrap();
        let config = Config::load_at(&temp.path().join("absent.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(
            &path,
            "base_url: https://agrohub.example/api\nweather:\n  api_key: w-key\ncache:\n  feed:\n    max_entries: 4\n    ttl_secs: 30\n",
        )
        .unwrap();

        let config = Config::load_at(&path).unwrap();
        assert_eq!(config.base_url, "https://agrohub.example/api");
        assert_eq!(config.weather.api_key.as_deref(), Some("w-key"));
        assert_eq!(config.weather.base_url, DEFAULT_WEATHER_URL);
        assert_eq!(config.cache.feed.max_entries, 4);
        assert_eq!(config.cache.users.max_entries, 100);
    }

    #[test]
    fn test_save_and_reload() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.yaml");
        let config = Config {
            session: Some(Session {
                access_token: "a".to_string(),
                refresh_token: "r".to_string(),
                expires_at: Utc::now(),
            }),
            ..Config::default()
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }

    #[test]
    fn test_zero_cache_size_rejected() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "cache:\n  users:\n    max_entries: 0\n    ttl_secs: 60\n").unwrap();

        let err = Config::load_at(&path).unwrap_err();
        assert!(err.to_string().contains("cache.users.max_entries"));
    }

    #[test]
    fn test_invalid_yaml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "base_url: [unclosed").unwrap();

        assert!(matches!(Config::load_at(&path), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_empty_url_rejected() {
        let config = Config {
            base_url: " ".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_resolve_path_prefers_override() {
        let path = Path::new("/tmp/agrohub-test.yaml");
        assert_eq!(Config::resolve_path(Some(path)).unwrap(), path);
    }
}
