use crate::address::RankingWeights;
use crate::error::{MeguriError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for meguri.
///
/// Precedence: defaults < config file < environment < CLI. The resolver
/// thresholds here are observed heuristics (see the address module); they
/// are surfaced as configuration precisely because they carry no
/// documented rationale.
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// Geocoding service base URL (Nominatim-compatible)
    pub geocoder_url: ConfigValue<String>,
    /// Routing service base URL (OSRM-compatible)
    pub osrm_url: ConfigValue<String>,
    /// User-Agent sent to third-party services
    pub user_agent: ConfigValue<String>,
    /// Minimum delay between consecutive geocoder lookups, in milliseconds
    pub throttle_ms: ConfigValue<u64>,
    /// Maximum ranked candidates returned per resolution
    pub max_results: ConfigValue<usize>,
    /// Stop trying generalized queries once this many results accumulated
    pub accumulate_target: ConfigValue<usize>,
    /// Relevance points when input and candidate contain each other
    pub containment_weight: ConfigValue<u32>,
    /// Relevance points per shared numeric token
    pub numeric_token_weight: ConfigValue<u32>,
    /// Relevance points per matched kanji run
    pub kanji_run_weight: ConfigValue<u32>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            geocoder_url: ConfigValue::new(
                "https://nominatim.openstreetmap.org".to_string(),
                ConfigSource::Default,
            ),
            osrm_url: ConfigValue::new(
                "https://router.project-osrm.org".to_string(),
                ConfigSource::Default,
            ),
            user_agent: ConfigValue::new(
                "meguri/0.1 (tourism route planner)".to_string(),
                ConfigSource::Default,
            ),
            throttle_ms: ConfigValue::new(100, ConfigSource::Default),
            max_results: ConfigValue::new(5, ConfigSource::Default),
            accumulate_target: ConfigValue::new(3, ConfigSource::Default),
            containment_weight: ConfigValue::new(100, ConfigSource::Default),
            numeric_token_weight: ConfigValue::new(20, ConfigSource::Default),
            kanji_run_weight: ConfigValue::new(10, ConfigSource::Default),
        }
    }

    /// The configured scoring weights as one value
    pub fn ranking_weights(&self) -> RankingWeights {
        RankingWeights {
            containment: self.containment_weight.value,
            numeric_token: self.numeric_token_weight.value,
            kanji_run: self.kanji_run_weight.value,
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| MeguriError::ConfigInvalid {
            key: "file".to_string(),
            reason: format!("Failed to read config file: {}", e),
        })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| MeguriError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(geocoder_url) = file_config.geocoder_url {
            self.geocoder_url.update(geocoder_url, ConfigSource::File);
        }

        if let Some(osrm_url) = file_config.osrm_url {
            self.osrm_url.update(osrm_url, ConfigSource::File);
        }

        if let Some(user_agent) = file_config.user_agent {
            self.user_agent.update(user_agent, ConfigSource::File);
        }

        if let Some(throttle_ms) = file_config.throttle_ms {
            self.throttle_ms.update(throttle_ms, ConfigSource::File);
        }

        if let Some(max_results) = file_config.max_results {
            self.max_results.update(max_results, ConfigSource::File);
        }

        if let Some(target) = file_config.accumulate_target {
            self.accumulate_target.update(target, ConfigSource::File);
        }

        if let Some(weight) = file_config.containment_weight {
            self.containment_weight.update(weight, ConfigSource::File);
        }

        if let Some(weight) = file_config.numeric_token_weight {
            self.numeric_token_weight.update(weight, ConfigSource::File);
        }

        if let Some(weight) = file_config.kanji_run_weight {
            self.kanji_run_weight.update(weight, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        if let Ok(url) = env::var("MEGURI_GEOCODER_URL") {
            self.geocoder_url.update(url, ConfigSource::Environment);
        }

        if let Ok(url) = env::var("MEGURI_OSRM_URL") {
            self.osrm_url.update(url, ConfigSource::Environment);
        }

        if let Ok(agent) = env::var("MEGURI_USER_AGENT") {
            self.user_agent.update(agent, ConfigSource::Environment);
        }

        if let Ok(throttle_str) = env::var("MEGURI_THROTTLE_MS") {
            match throttle_str.parse::<u64>() {
                Ok(ms) => self.throttle_ms.update(ms, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid MEGURI_THROTTLE_MS value '{}': expected milliseconds as integer",
                    throttle_str
                ),
            }
        }

        if let Ok(max_str) = env::var("MEGURI_MAX_RESULTS") {
            match max_str.parse::<usize>() {
                Ok(max) => self.max_results.update(max, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid MEGURI_MAX_RESULTS value '{}': expected a positive integer",
                    max_str
                ),
            }
        }

        if let Some(target) = parse_env_number::<usize>("MEGURI_ACCUMULATE_TARGET") {
            self.accumulate_target.update(target, ConfigSource::Environment);
        }

        if let Some(weight) = parse_env_number::<u32>("MEGURI_CONTAINMENT_WEIGHT") {
            self.containment_weight.update(weight, ConfigSource::Environment);
        }

        if let Some(weight) = parse_env_number::<u32>("MEGURI_NUMERIC_TOKEN_WEIGHT") {
            self.numeric_token_weight.update(weight, ConfigSource::Environment);
        }

        if let Some(weight) = parse_env_number::<u32>("MEGURI_KANJI_RUN_WEIGHT") {
            self.kanji_run_weight.update(weight, ConfigSource::Environment);
        }

        self
    }
}

/// Read a numeric env var, warning (and ignoring it) when unparseable
fn parse_env_number<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Invalid {} value '{}': expected a non-negative integer", key, raw);
            None
        }
    }
}

impl Default for LayeredConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Shape of the optional TOML config file
#[derive(Debug, Deserialize)]
struct FileConfig {
    geocoder_url: Option<String>,
    osrm_url: Option<String>,
    user_agent: Option<String>,
    throttle_ms: Option<u64>,
    max_results: Option<usize>,
    accumulate_target: Option<usize>,
    containment_weight: Option<u32>,
    numeric_token_weight: Option<u32>,
    kanji_run_weight: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.geocoder_url.value, "https://nominatim.openstreetmap.org");
        assert_eq!(config.throttle_ms.value, 100);
        assert_eq!(config.max_results.value, 5);
        assert_eq!(config.accumulate_target.value, 3);
        assert_eq!(config.geocoder_url.source, ConfigSource::Default);
    }

    #[test]
    fn test_default_ranking_weights() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.ranking_weights(), RankingWeights::default());
    }

    #[test]
    fn test_precedence_ordering() {
        assert!(ConfigSource::Cli.precedence() > ConfigSource::Environment.precedence());
        assert!(ConfigSource::Environment.precedence() > ConfigSource::File.precedence());
        assert!(ConfigSource::File.precedence() > ConfigSource::Default.precedence());
    }

    #[test]
    fn test_update_respects_precedence() {
        let mut value = ConfigValue::new(100u64, ConfigSource::Environment);

        value.update(200, ConfigSource::File);
        assert_eq!(value.value, 100);

        value.update(300, ConfigSource::Cli);
        assert_eq!(value.value, 300);
        assert_eq!(value.source, ConfigSource::Cli);
    }
}
