//! Handlers shared by every plain CRUD resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use service::{CrudService, Resource};

use crate::errors::JsonApiError;
use crate::state::ServerState;

/// `/api/{collection}` and `/api/{collection}/:id` for one resource.
pub fn resource_routes<R: Resource>() -> Router<ServerState> {
    let base = format!("/api/{}", R::COLLECTION);
    Router::new()
        .route(&base, get(list::<R>).post(create::<R>))
        .route(&format!("{base}/:id"), get(get_one::<R>).put(update::<R>).delete(remove::<R>))
}

fn crud<R: Resource>(state: &ServerState) -> CrudService<R> { CrudService::new(state.db.clone()) }

async fn create<R: Resource>(
    State(state): State<ServerState>,
    body: Result<Json<R::Dto>, JsonRejection>,
) -> Result<(StatusCode, Json<R::Dto>), JsonApiError> {
    let Json(dto) = body?;
    let created = crud::<R>(&state).create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list<R: Resource>(State(state): State<ServerState>) -> Result<Json<Vec<R::Dto>>, JsonApiError> {
    Ok(Json(crud::<R>(&state).list().await?))
}

async fn get_one<R: Resource>(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<R::Dto>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(crud::<R>(&state).get_by_id(id).await?))
}

async fn update<R: Resource>(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<R::Dto>, JsonRejection>,
) -> Result<Json<R::Dto>, JsonApiError> {
    let Path(id) = id?;
    let Json(dto) = body?;
    Ok(Json(crud::<R>(&state).update(id, dto).await?))
}

async fn remove<R: Resource>(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    crud::<R>(&state).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
