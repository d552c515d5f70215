use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Request body is not valid JSON: {0}")]
    InvalidBody(#[source] serde_json::Error),

    #[error("Prediction service unreachable: {0}")]
    UpstreamUnavailable(#[source] reqwest::Error),

    #[error("Prediction service returned a non-JSON body: {0}")]
    UpstreamMalformed(#[source] reqwest::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            AppError::UpstreamMalformed(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(%status, error = %self, "proxy request failed");

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
