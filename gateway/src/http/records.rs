//! CRUD routes for one record collection, generic over the record kind.
//!
//! Mounted once per kind: `/api/agents` and `/api/commands`.

use std::sync::Arc;

use agentdesk_common::{ApiResponse, Record};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::application::services::RecordService;
use crate::http::ApiError;

type Service<R> = State<Arc<RecordService<R>>>;
type Reply<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// `GET|POST /` and `GET|PUT|DELETE /{id}` over one collection.
pub fn routes<R: Record>(service: Arc<RecordService<R>>) -> Router {
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route("/{id}", get(fetch::<R>).put(update::<R>).delete(remove::<R>))
        .with_state(service)
}

async fn list<R: Record>(State(service): Service<R>) -> Reply<Vec<R>> {
    Ok(Json(ApiResponse::ok(service.list().await?)))
}

async fn fetch<R: Record>(State(service): Service<R>, Path(id): Path<String>) -> Reply<R> {
    let record = service
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(R::KIND.label()))?;
    Ok(Json(ApiResponse::ok(record)))
}

async fn create<R: Record>(
    State(service): Service<R>,
    payload: Result<Json<R::Patch>, JsonRejection>,
) -> Reply<R> {
    let Json(patch) = payload?;
    Ok(Json(ApiResponse::ok(service.create(patch).await?)))
}

async fn update<R: Record>(
    State(service): Service<R>,
    Path(id): Path<String>,
    payload: Result<Json<R::Patch>, JsonRejection>,
) -> Reply<R> {
    let Json(patch) = payload?;
    Ok(Json(ApiResponse::ok(service.update(&id, patch).await?)))
}

async fn remove<R: Record>(State(service): Service<R>, Path(id): Path<String>) -> Reply<()> {
    service.delete(&id).await?;
    Ok(Json(ApiResponse::done()))
}
