//! `GET|PUT|PATCH /api/settings`.

use std::sync::Arc;

use agentdesk_common::ApiResponse;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::get;
use axum::{Json, Router};

use crate::application::services::SettingsService;
use crate::domain::Settings;
use crate::http::ApiError;

type Reply = Result<Json<ApiResponse<Settings>>, ApiError>;

pub fn routes(service: Arc<SettingsService>) -> Router {
    Router::new()
        .route("/", get(show).put(replace).patch(merge))
        .with_state(service)
}

async fn show(State(service): State<Arc<SettingsService>>) -> Reply {
    Ok(Json(ApiResponse::ok(service.get().await?)))
}

async fn replace(
    State(service): State<Arc<SettingsService>>,
    payload: Result<Json<Settings>, JsonRejection>,
) -> Reply {
    let Json(settings) = payload?;
    Ok(Json(ApiResponse::ok(service.replace(settings).await?)))
}

async fn merge(
    State(service): State<Arc<SettingsService>>,
    payload: Result<Json<Settings>, JsonRejection>,
) -> Reply {
    let Json(patch) = payload?;
    Ok(Json(ApiResponse::ok(service.merge(patch).await?)))
}
