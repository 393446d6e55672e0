pub mod crud;
pub mod expense_files;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::resources::{Accounts, Employees, Expenses, Users};

use crate::openapi;
use crate::state::ServerState;

/// Largest accepted request body, multipart uploads included.
pub const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi::document())
}

/// Build the full application router.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    let files = Router::new()
        .route("/api/expense-files", get(expense_files::list))
        .route("/api/expense-files/upload", post(expense_files::upload))
        .route("/api/expense-files/:id/download", get(expense_files::download))
        .route("/api/expense-files/:id", delete(expense_files::delete));

    public
        .merge(crud::resource_routes::<Users>())
        .merge(crud::resource_routes::<Accounts>())
        .merge(crud::resource_routes::<Employees>())
        .merge(crud::resource_routes::<Expenses>())
        .merge(files)
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and transport errors
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
