use serde::{Deserialize, Serialize};

use crate::fetcher::http_fetcher::USER_AGENT;
use crate::fetcher::DEFAULT_COUNTRY;

pub const DEFAULT_API_KEY: &str = "default_api_key";

/// Environment variable consulted at runtime (and by `build.rs` at build time)
pub const API_KEY_ENV: &str = "NEWS_API_KEY";

/// Key baked in by `build.rs`, or the placeholder when none was provided.
pub fn build_time_api_key() -> &'static str {
    option_env!("NEWS_API_KEY").unwrap_or(DEFAULT_API_KEY)
}

/// NewsAPI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Overrides every other key source when set
    pub api_key: Option<String>,

    /// Two-letter country code for top headlines (default: "us")
    pub country: String,

    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            country: DEFAULT_COUNTRY.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ApiConfig {
    /// Config file, then `NEWS_API_KEY`, then the build-time key.
    pub fn resolve_api_key(&self) -> String {
        self.resolve_api_key_with(std::env::var(API_KEY_ENV).ok())
    }

    fn resolve_api_key_with(&self, env_key: Option<String>) -> String {
        let non_empty = |key: &String| !key.trim().is_empty();

        self.api_key
            .clone()
            .filter(non_empty)
            .or_else(|| env_key.filter(non_empty))
            .unwrap_or_else(|| build_time_api_key().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ApiConfig::default();
        assert_eq!(config.api_key, None);
        assert_eq!(config.country, "us");
        assert!(config.user_agent.starts_with("newsworld/"));
    }

    #[test]
    fn test_config_key_wins() {
        let config = ApiConfig {
            api_key: Some("from-file".into()),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key_with(Some("from-env".into())), "from-file");
    }

    #[test]
    fn test_env_key_used_when_config_missing() {
        let config = ApiConfig::default();
        assert_eq!(config.resolve_api_key_with(Some("from-env".into())), "from-env");
    }

    #[test]
    fn test_blank_keys_are_ignored() {
        let config = ApiConfig {
            api_key: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_api_key_with(Some(String::new())),
            build_time_api_key()
        );
    }

    #[test]
    fn test_falls_back_to_build_time_key() {
        let config = ApiConfig::default();
        let key = config.resolve_api_key_with(None);
        assert_eq!(key, build_time_api_key());
        assert!(!key.is_empty());
    }
}
