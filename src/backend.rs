//! Privileged backend client.
//!
//! One [`BackendClient`] is built per process from [`BackendConfig`] and
//! shared by reference; it carries the service-role credentials as the
//! headers every request must send and never persists or refreshes a user
//! session. No queries are issued yet.

use reqwest::Url;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use thiserror::Error;

use crate::config::{BackendConfig, ConfigError};

const API_KEY_HEADER: HeaderName = HeaderName::from_static("apikey");

#[derive(Error, Debug)]
pub enum BackendError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid backend url {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("service role key is not a valid header value")]
    InvalidKey,
}

/// Session handling for the handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(test), allow(dead_code))]
pub struct AuthOptions {
    pub auto_refresh_token: bool,
    pub persist_session: bool,
}

impl AuthOptions {
    /// Server-side usage: every request stands alone
    pub const SERVER: AuthOptions = AuthOptions {
        auto_refresh_token: false,
        persist_session: false,
    };
}

/// Handle to the backend service with service-role access
#[derive(Debug, Clone)]
#[cfg_attr(not(test), allow(dead_code))]
pub struct BackendClient {
    base_url: Url,
    auth: AuthOptions,
    headers: HeaderMap,
}

impl BackendClient {
    /// Build from the process environment
    pub fn from_env() -> Result<Self, BackendError> {
        let config = BackendConfig::load()?;
        Self::new(&config)
    }

    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let base_url = Url::parse(&config.url).map_err(|e| BackendError::InvalidUrl {
            url: config.url.clone(),
            message: e.to_string(),
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(BackendError::InvalidUrl {
                url: config.url.clone(),
                message: format!("unsupported scheme {}", base_url.scheme()),
            });
        }

        let headers = service_role_headers(&config.service_role_key)?;

        tracing::info!(url = %base_url, "backend client initialized");

        Ok(Self {
            base_url,
            auth: AuthOptions::SERVER,
            headers,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn auth_options(&self) -> AuthOptions {
        self.auth
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn default_headers(&self) -> &HeaderMap {
        &self.headers
    }
}

fn service_role_headers(key: &str) -> Result<HeaderMap, BackendError> {
    let mut api_key = HeaderValue::from_str(key).map_err(|_| BackendError::InvalidKey)?;
    api_key.set_sensitive(true);
    let mut bearer =
        HeaderValue::from_str(&format!("Bearer {key}")).map_err(|_| BackendError::InvalidKey)?;
    bearer.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(API_KEY_HEADER, api_key);
    headers.insert(AUTHORIZATION, bearer);
    Ok(headers)
}
