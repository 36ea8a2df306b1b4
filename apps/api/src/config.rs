use thiserror::Error;

use crate::jobs::apify::DEFAULT_APIFY_BASE_URL;
use crate::jobs::DEFAULT_LOCATION;
use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Required environment variable '{0}' is not set")]
    Missing(&'static str),

    #[error("Environment variable '{key}' has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
/// Construction fails if either provider secret is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub llm_model: String,
    pub apify_api_token: String,
    pub apify_base_url: String,
    pub apify_max_wait_rounds: u32,
    pub job_search_rows: u32,
    pub job_search_location: String,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            openai_api_key: require(&lookup, "OPENAI_API_KEY")?,
            openai_base_url: optional(&lookup, "OPENAI_BASE_URL", DEFAULT_BASE_URL),
            llm_model: optional(&lookup, "LLM_MODEL", DEFAULT_MODEL),
            apify_api_token: require(&lookup, "APIFY_API_TOKEN")?,
            apify_base_url: optional(&lookup, "APIFY_BASE_URL", DEFAULT_APIFY_BASE_URL),
            apify_max_wait_rounds: parsed(&lookup, "APIFY_MAX_WAIT_ROUNDS", 10)?,
            job_search_rows: parsed(&lookup, "JOB_SEARCH_ROWS", 15)?,
            job_search_location: optional(&lookup, "JOB_SEARCH_LOCATION", DEFAULT_LOCATION),
            max_upload_bytes: parsed(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            port: parsed(&lookup, "PORT", 8080)?,
            rust_log: optional(&lookup, "RUST_LOG", "info"),
        })
    }
}

fn require<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn optional<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parsed<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key).filter(|v| !v.trim().is_empty()) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_openai_key_is_reported() {
        let result = Config::from_lookup(lookup_from(&[("APIFY_API_TOKEN", "tok")]));
        assert_eq!(result.unwrap_err(), ConfigError::Missing("OPENAI_API_KEY"));
    }

    #[test]
    fn test_missing_apify_token_is_reported() {
        let result = Config::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-test")]));
        assert_eq!(result.unwrap_err(), ConfigError::Missing("APIFY_API_TOKEN"));
    }

    #[test]
    fn test_blank_secret_counts_as_missing() {
        let result = Config::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "   "),
            ("APIFY_API_TOKEN", "tok"),
        ]));
        assert_eq!(result.unwrap_err(), ConfigError::Missing("OPENAI_API_KEY"));
    }

    #[test]
    fn test_defaults_applied_when_optional_values_absent() {
        let config = Config::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("APIFY_API_TOKEN", "tok"),
        ]))
        .unwrap();

        assert_eq!(config.llm_model, "gpt-4o-mini");
        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(config.apify_base_url, "https://api.apify.com");
        assert_eq!(config.job_search_rows, 15);
        assert_eq!(config.job_search_location, "india");
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("APIFY_API_TOKEN", "tok"),
            ("PORT", "eighty"),
        ]));
        assert_eq!(
            result.unwrap_err(),
            ConfigError::Invalid {
                key: "PORT",
                value: "eighty".to_string()
            }
        );
    }
}
