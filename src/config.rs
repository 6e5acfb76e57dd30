use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime configuration for the data core
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Base URL of the public meal lookup service
    #[serde(default = "default_meal_api_url")]
    pub meal_api_url: String,
    /// Base URL of the favorites backend
    #[serde(default = "default_favorites_api_url")]
    pub favorites_api_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// How many random recipes the initial home load fetches
    #[serde(default = "default_random_batch_size")]
    pub random_batch_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            meal_api_url: default_meal_api_url(),
            favorites_api_url: default_favorites_api_url(),
            timeout: default_timeout(),
            random_batch_size: default_random_batch_size(),
        }
    }
}

// Default value functions
fn default_meal_api_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_favorites_api_url() -> String {
    "http://localhost:5001/api".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_random_batch_size() -> usize {
    12
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEALDECK__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEALDECK__MEAL_API_URL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("MEALDECK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(
            default_meal_api_url(),
            "https://www.themealdb.com/api/json/v1/1"
        );
        assert_eq!(default_favorites_api_url(), "http://localhost:5001/api");
        assert_eq!(default_timeout(), 30);
        assert_eq!(default_random_batch_size(), 12);
    }

    #[test]
    fn test_default_config_matches_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.meal_api_url, default_meal_api_url());
        assert_eq!(config.timeout, 30);
        assert_eq!(config.random_batch_size, 12);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        // No config file and no MEALDECK__ variables set in the test
        // environment: every field should come from its default function.
        let config = AppConfig::load().unwrap();
        assert_eq!(config.random_batch_size, 12);
        assert_eq!(config.timeout, 30);
    }
}
