//! `GET /api/projects` and `GET /api/projects/{id}`.

use std::sync::Arc;

use agentdesk_common::ApiResponse;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::application::services::ProjectService;
use crate::domain::ProjectSummary;
use crate::http::ApiError;

pub fn routes(service: Arc<ProjectService>) -> Router {
    Router::new()
        .route("/", get(list))
        .route("/{id}", get(fetch))
        .with_state(service)
}

async fn list(
    State(service): State<Arc<ProjectService>>,
) -> Result<Json<ApiResponse<Vec<ProjectSummary>>>, ApiError> {
    Ok(Json(ApiResponse::ok(service.list().await?)))
}

async fn fetch(
    State(service): State<Arc<ProjectService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ProjectSummary>>, ApiError> {
    let project = service
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Project"))?;
    Ok(Json(ApiResponse::ok(project)))
}
