use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub store: StoreSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    pub endpoint: String,
    pub api_key: String,
    #[serde(default = "default_users_table")]
    pub users_table: String,
    pub timeout_secs: Option<u64>,
}

fn default_users_table() -> String { "ShareSpaceUsers".to_string() }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheSettings {
    /// L2 is skipped when unset
    pub redis_url: Option<String>,
    pub ttl_secs: Option<u64>,
    pub l1_cache_size: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    pub default_limit: Option<u16>,
    pub max_limit: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_budget_weight")]
    pub budget: f64,
    #[serde(default = "default_housing_weight")]
    pub housing: f64,
    #[serde(default = "default_lifestyle_weight")]
    pub lifestyle: f64,
    #[serde(default = "default_compatibility_weight")]
    pub compatibility: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            location: default_location_weight(),
            budget: default_budget_weight(),
            housing: default_housing_weight(),
            lifestyle: default_lifestyle_weight(),
            compatibility: default_compatibility_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            location: config.location,
            budget: config.budget,
            housing: config.housing,
            lifestyle: config.lifestyle,
            compatibility: config.compatibility,
        }
    }
}

fn default_location_weight() -> f64 { 0.25 }
fn default_budget_weight() -> f64 { 0.20 }
fn default_housing_weight() -> f64 { 0.15 }
fn default_lifestyle_weight() -> f64 { 0.20 }
fn default_compatibility_weight() -> f64 { 0.20 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingSettings {
    /// `LOG_LEVEL` / `LOG_FORMAT` values win over the configured ones
    pub fn with_env_overrides(&self, level: Option<String>, format: Option<String>) -> Self {
        Self {
            level: level.unwrap_or_else(|| self.level.clone()),
            format: format.unwrap_or_else(|| self.format.clone()),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SHARESPACE__)
    /// 5. Plain `REDIS_URL` / `PROFILE_STORE_API_KEY`
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SHARESPACE__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("SHARESPACE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_env_overrides(settings)?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SHARESPACE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.scoring_weights()
            .validate()
            .map_err(|e| ConfigError::Message(format!("scoring.weights: {}", e)))?;

        if let (Some(default), Some(max)) = (self.matching.default_limit, self.matching.max_limit) {
            if default > max {
                return Err(ConfigError::Message(format!(
                    "matching.default_limit ({}) exceeds matching.max_limit ({})",
                    default, max
                )));
            }
        }

        Ok(())
    }
}

/// Apply the conventional un-prefixed variables on top of the layered config
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(redis_url) = env::var("REDIS_URL") {
        builder = builder.set_override("cache.redis_url", redis_url)?;
    }
    if let Ok(api_key) = env::var("PROFILE_STORE_API_KEY") {
        builder = builder.set_override("store.api_key", api_key)?;
    }

    builder.build()
}
