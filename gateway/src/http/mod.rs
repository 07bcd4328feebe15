//! HTTP dispatcher — decodes requests, calls one service operation, and
//! wraps the result in the `{success, data | error}` envelope.

pub mod cli;
pub mod error;
pub mod projects;
pub mod records;
pub mod settings;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::app::AppState;
pub use error::ApiError;

/// Build the full router over the shared services.
pub fn router(state: &AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/agents", records::routes(state.agents.clone()))
        .nest("/api/commands", records::routes(state.commands.clone()))
        .nest("/api/settings", settings::routes(state.settings.clone()))
        .nest("/api/projects", projects::routes(state.projects.clone()))
        .nest("/api/cli", cli::routes(state.cli.clone()))
        .fallback(unknown_route)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Minimal health-check handler for frontends and launch scripts.
async fn health() -> StatusCode {
    StatusCode::OK
}

async fn unknown_route() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "route not found")
}
