//! Environment configuration for the proxy server and the backend client.
//!
//! Optional values fall back to logged defaults; required values fail
//! loading with a [`ConfigError`].

use std::{env, fmt::Display, str::FromStr, time::Duration};

use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_PORT: &str = "3000";
pub const DEFAULT_PREDICT_URL: &str = "http://127.0.0.1:8000/predict_cfr";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: &str = "30";

pub const BACKEND_URL_KEY: &str = "SUPABASE_URL";
pub const BACKEND_URL_FALLBACK_KEY: &str = "NEXT_PUBLIC_SUPABASE_URL";
pub const SERVICE_ROLE_KEY: &str = "SUPABASE_SERVICE_ROLE_KEY";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),

    #[error("invalid {key} value: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Proxy server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub predict_url: String,
    pub upstream_timeout: Duration,
}

impl ServerConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs: u64 = try_load(
            &lookup,
            "FRA_DSS_UPSTREAM_TIMEOUT_SECS",
            DEFAULT_UPSTREAM_TIMEOUT_SECS,
        )?;

        Ok(Self {
            port: try_load(&lookup, "FRA_DSS_PORT", DEFAULT_PORT)?,
            predict_url: try_load(&lookup, "FRA_DSS_PREDICT_URL", DEFAULT_PREDICT_URL)?,
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Backend service credentials
#[derive(Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub service_role_key: String,
}

// Keep the secret out of logs
impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("url", &self.url)
            .field("service_role_key", &"<redacted>")
            .finish()
    }
}

impl BackendConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = var(&lookup, BACKEND_URL_KEY)
            .or_else(|| var(&lookup, BACKEND_URL_FALLBACK_KEY))
            .ok_or(ConfigError::Missing(BACKEND_URL_KEY))?;
        let service_role_key =
            var(&lookup, SERVICE_ROLE_KEY).ok_or(ConfigError::Missing(SERVICE_ROLE_KEY))?;

        Ok(Self {
            url,
            service_role_key,
        })
    }
}

/// Non-empty, trimmed value for `key`
fn var<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn try_load<F, T>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    var(lookup, key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| {
            warn!("Invalid {key} value: {e}");
            ConfigError::Invalid {
                key,
                message: e.to_string(),
            }
        })
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
    fn test_server_config_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.predict_url, "http://127.0.0.1:8000/predict_cfr");
        assert_eq!(config.upstream_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_server_config_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("FRA_DSS_PORT", "8080"),
            ("FRA_DSS_PREDICT_URL", "http://predict.internal/predict_cfr"),
            ("FRA_DSS_UPSTREAM_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.predict_url, "http://predict.internal/predict_cfr");
        assert_eq!(config.upstream_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_server_config_invalid_port() {
        let err = ServerConfig::from_lookup(lookup_from(&[("FRA_DSS_PORT", "not-a-port")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "FRA_DSS_PORT", .. }));
    }

    #[test]
    fn test_backend_config_complete() {
        let config = BackendConfig::from_lookup(lookup_from(&[
            ("SUPABASE_URL", "https://example.supabase.co"),
            ("SUPABASE_SERVICE_ROLE_KEY", "secret"),
        ]))
        .unwrap();
        assert_eq!(config.url, "https://example.supabase.co");
        assert_eq!(config.service_role_key, "secret");
    }

    #[test]
    fn test_backend_config_url_fallback() {
        let config = BackendConfig::from_lookup(lookup_from(&[
            ("NEXT_PUBLIC_SUPABASE_URL", "https://fallback.supabase.co"),
            ("SUPABASE_SERVICE_ROLE_KEY", "secret"),
        ]))
        .unwrap();
        assert_eq!(config.url, "https://fallback.supabase.co");
    }

    #[test]
    fn test_backend_config_missing_secret() {
        let err = BackendConfig::from_lookup(lookup_from(&[(
            "SUPABASE_URL",
            "https://example.supabase.co",
        )]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing(SERVICE_ROLE_KEY));
    }

    #[test]
    fn test_backend_config_blank_secret_is_missing() {
        let err = BackendConfig::from_lookup(lookup_from(&[
            ("SUPABASE_URL", "https://example.supabase.co"),
            ("SUPABASE_SERVICE_ROLE_KEY", "   "),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing(SERVICE_ROLE_KEY));
    }

    #[test]
    fn test_backend_config_missing_url() {
        let err = BackendConfig::from_lookup(lookup_from(&[("SUPABASE_SERVICE_ROLE_KEY", "s")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::Missing(BACKEND_URL_KEY));
    }

    #[test]
    fn test_backend_config_debug_redacts_secret() {
        let config = BackendConfig {
            url: "https://example.supabase.co".to_string(),
            service_role_key: "super-secret".to_string(),
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
