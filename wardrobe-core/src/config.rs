use anyhow::{Context, Result, anyhow, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::PathBuf, time::Duration};

use crate::provider::ProviderId;

/// Configuration for a single provider (e.g., API key).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub api_key: String,
}

/// Tuning for weather lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherSettings {
    /// Upper bound on a single provider request.
    pub request_timeout_secs: u64,
    /// A cached reading for the same coordinates is reused while younger than this.
    pub cache_freshness_minutes: i64,
    /// Wind speed at which calm weather counts as windy.
    pub windy_threshold_mps: f64,
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self { request_timeout_secs: 10, cache_freshness_minutes: 10, windy_threshold_mps: 10.0 }
    }
}

const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
/// One week.
const MAX_CACHE_FRESHNESS_MINUTES: i64 = 7 * 24 * 60;

impl WeatherSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Out-of-range values disable caching instead of panicking.
    pub fn cache_freshness(&self) -> chrono::Duration {
        chrono::TimeDelta::try_minutes(self.cache_freshness_minutes)
            .filter(|window| *window >= chrono::TimeDelta::zero())
            .unwrap_or_else(chrono::TimeDelta::zero)
    }

    /// Reject settings that would make every lookup fail or never expire.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            bail!(
                "[weather] request_timeout_secs must be between 1 and {MAX_REQUEST_TIMEOUT_SECS}, got {}",
                self.request_timeout_secs
            );
        }
        if !(0..=MAX_CACHE_FRESHNESS_MINUTES).contains(&self.cache_freshness_minutes) {
            bail!(
                "[weather] cache_freshness_minutes must be between 0 and {MAX_CACHE_FRESHNESS_MINUTES}, got {}",
                self.cache_freshness_minutes
            );
        }
        if !self.windy_threshold_mps.is_finite() || self.windy_threshold_mps < 0.0 {
            bail!("[weather] windy_threshold_mps must be a non-negative number");
        }
        Ok(())
    }
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Optional default provider id, e.g. "openweather" or "weatherapi".
    pub default_provider: Option<String>,

    /// Where closet, profile and cached weather live. Defaults to the
    /// platform data directory.
    pub data_dir: Option<PathBuf>,

    /// Example TOML:
    /// [providers.openweather]
    /// api_key = "..."
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,

    #[serde(default)]
    pub weather: WeatherSettings,
}

impl Config {
    /// Return the default provider as a strongly-typed ProviderId.
    pub fn default_provider_id(&self) -> Result<ProviderId> {
        let s = self.default_provider.as_ref().ok_or_else(|| {
            anyhow::anyhow!(
                "No default provider configured.\n\
                 Hint: run `wardrobe configure <provider>` (e.g. `wardrobe configure openweather`) first."
            )
        })?;

        ProviderId::try_from(s.as_str())
    }

    /// Store default provider as string.
    pub fn set_default_provider(&mut self, id: ProviderId) {
        self.default_provider = Some(id.as_str().to_string());
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file yet, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.weather.validate().context("Invalid weather settings")?;
        Ok(config)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("dev", "wardrobe", "wardrobe-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.toml"))
    }

    /// Directory for persisted records: `data_dir` if set, else the platform default.
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::project_dirs()?.data_dir().to_path_buf()),
        }
    }

    /// Convenience helper: set/replace a provider API key and optionally set default provider.
    pub fn upsert_provider_api_key(&mut self, provider_id: ProviderId, api_key: String) {
        self.providers.insert(provider_id.as_str().to_string(), ProviderConfig { api_key });

        if self.default_provider.is_none() {
            self.default_provider = Some(provider_id.to_string());
        }
    }

    /// Returns API key for a provider, if present.
    pub fn provider_api_key(&self, provider_id: ProviderId) -> Option<&str> {
        self.providers.get(provider_id.as_str()).map(|cfg| cfg.api_key.as_str())
    }

    pub fn is_provider_configured(&self, provider_id: ProviderId) -> bool {
        self.provider_api_key(provider_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderId;

    #[test]
    fn default_provider_id_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.default_provider_id().unwrap_err();

        assert!(err.to_string().contains("No default provider configured"));
    }

    #[test]
    fn set_api_key_and_default_for_provider() {
        let mut cfg = Config::default();

        cfg.upsert_provider_api_key(ProviderId::OpenWeather, "OPEN_KEY".into());

        let default = cfg.default_provider_id().expect("default provider must exist");
        assert_eq!(default, ProviderId::OpenWeather);

        let key = cfg.provider_api_key(ProviderId::OpenWeather);
        assert_eq!(key, Some("OPEN_KEY"));
        assert!(cfg.is_provider_configured(ProviderId::OpenWeather));
        assert!(!cfg.is_provider_configured(ProviderId::WeatherApi));
    }

    #[test]
    fn upsert_does_not_override_existing_default() {
        let mut cfg = Config::default();

        cfg.upsert_provider_api_key(ProviderId::OpenWeather, "OPEN_KEY".into());
        cfg.upsert_provider_api_key(ProviderId::WeatherApi, "WEATHER_KEY".into());

        let default = cfg.default_provider_id().expect("default provider must exist");
        assert_eq!(default, ProviderId::OpenWeather);

        cfg.set_default_provider(ProviderId::WeatherApi);
        let default = cfg.default_provider_id().expect("default provider must exist");
        assert_eq!(default, ProviderId::WeatherApi);
    }

    #[test]
    fn weather_settings_fill_in_missing_fields() {
        let cfg = Config::from_toml(
            r#"
            default_provider = "weatherapi"

            [providers.weatherapi]
            api_key = "abc"

            [weather]
            request_timeout_secs = 3
            "#,
        )
        .expect("valid toml");

        assert_eq!(cfg.weather.request_timeout(), Duration::from_secs(3));
        assert_eq!(cfg.weather.cache_freshness(), chrono::Duration::minutes(10));
        assert_eq!(cfg.weather.windy_threshold_mps, 10.0);
        assert_eq!(cfg.provider_api_key(ProviderId::WeatherApi), Some("abc"));
    }

    #[test]
    fn empty_file_is_default_config() {
        let cfg = Config::from_toml("").expect("empty toml");
        assert!(cfg.default_provider.is_none());
        assert_eq!(cfg.weather, WeatherSettings::default());
    }

    #[test]
    fn oversized_cache_freshness_is_rejected() {
        let err = Config::from_toml("[weather]\ncache_freshness_minutes = 9223372036854775807").unwrap_err();
        assert!(format!("{err:#}").contains("cache_freshness_minutes must be between 0 and"));

        assert!(Config::from_toml("[weather]\ncache_freshness_minutes = -5").is_err());
    }

    #[test]
    fn cache_freshness_never_panics() {
        let settings = WeatherSettings { cache_freshness_minutes: i64::MAX, ..WeatherSettings::default() };
        assert_eq!(settings.cache_freshness(), chrono::TimeDelta::zero());

        let settings = WeatherSettings { cache_freshness_minutes: -3, ..WeatherSettings::default() };
        assert_eq!(settings.cache_freshness(), chrono::TimeDelta::zero());
    }

    #[test]
    fn zero_request_timeout_is_rejected() {
        let err = Config::from_toml("[weather]\nrequest_timeout_secs = 0").unwrap_err();
        assert!(format!("{err:#}").contains("request_timeout_secs must be between 1 and"));
        assert!(Config::from_toml("[weather]\nrequest_timeout_secs = 1").is_ok());
    }

    #[test]
    fn data_dir_override_wins() {
        let cfg = Config { data_dir: Some(PathBuf::from("/tmp/wardrobe")), ..Config::default() };
        assert_eq!(cfg.data_dir().unwrap(), PathBuf::from("/tmp/wardrobe"));
    }
}
