//! `POST /api/cli/run` — one-shot invocation of the external CLI.

use std::sync::Arc;

use agentdesk_common::ApiResponse;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};

use crate::application::services::CliToolService;
use crate::domain::{CliRunOutput, CliRunRequest};
use crate::http::ApiError;

pub fn routes(service: Arc<CliToolService>) -> Router {
    Router::new().route("/run", post(run)).with_state(service)
}

async fn run(
    State(service): State<Arc<CliToolService>>,
    payload: Result<Json<CliRunRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<CliRunOutput>>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(ApiResponse::ok(service.run(request).await?)))
}
