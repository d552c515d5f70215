use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::State as AxumState,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::{error::AppError, state::State};

/// Body is parsed as JSON whatever its `Content-Type` says
pub async fn predict_cfr_handler(
    AxumState(state): AxumState<Arc<State>>,
    body: Bytes,
) -> Result<Response, AppError> {
    let payload: Value = serde_json::from_slice(&body).map_err(AppError::InvalidBody)?;
    let (status, body) = state.proxy.forward(&payload).await?;

    Ok((status, Json(body)).into_response())
}

pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
