//! # Prediction proxy
//!
//! Relays a JSON body to the CFR prediction service and hands back its
//! JSON answer untouched.
//!
//! The body is neither validated nor rewritten: any JSON value is posted
//! as-is with `Content-Type: application/json`. The upstream status code
//! is relayed alongside its body, so a prediction service that answers
//! `422` with a JSON error reaches the caller as `422` with the same body.
//!
//! Failures that leave nothing to relay become [`AppError`]s:
//! - the service cannot be reached or does not answer within the timeout
//! - the service answers with something that is not JSON

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::Value;
use tracing::debug;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct PredictionProxy {
    client: reqwest::Client,
    upstream_url: String,
}

impl PredictionProxy {
    pub fn new(upstream_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            upstream_url: upstream_url.to_string(),
        })
    }

    pub fn upstream_url(&self) -> &str {
        &self.upstream_url
    }

    /// One outbound POST per call, no retry
    pub async fn forward(&self, body: &Value) -> Result<(StatusCode, Value), AppError> {
        let response = self
            .client
            .post(&self.upstream_url)
            .json(body)
            .send()
            .await
            .map_err(AppError::UpstreamUnavailable)?;

        let status = response.status();
        debug!(%status, url = %self.upstream_url, "prediction service answered");

        let payload: Value = response.json().await.map_err(AppError::UpstreamMalformed)?;

        Ok((status, payload))
    }
}
