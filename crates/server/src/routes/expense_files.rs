use axum::body::Body;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::PathRejection;
use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use service::expense_file::{ExpenseFileDto, UploadedFile};
use tokio_util::io::ReaderStream;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[utoipa::path(
    post, path = "/api/expense-files/upload", tag = "expense-files",
    request_body(content = crate::openapi::UploadFormDoc, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Stored", body = crate::openapi::ExpenseFileDoc),
        (status = 400, description = "Invalid file or extension"),
        (status = 404, description = "User or account not found"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn upload(
    State(state): State<ServerState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<ExpenseFileDto>), JsonApiError> {
    let mut multipart = multipart?;
    let mut file = UploadedFile::default();
    let mut user_id = None;
    let mut account_id = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                file.original_name = field.file_name().map(str::to_string);
                file.bytes = field.bytes().await?.to_vec();
            }
            "userId" => user_id = Some(parse_id("userId", &field.text().await?)?),
            "accountId" => account_id = Some(parse_id("accountId", &field.text().await?)?),
            _ => {}
        }
    }
    let user_id = user_id.ok_or_else(|| JsonApiError::bad_request("Missing multipart field: userId"))?;
    let account_id = account_id.ok_or_else(|| JsonApiError::bad_request("Missing multipart field: accountId"))?;

    info!(user_id, account_id, size = file.bytes.len(), "expense file upload received");
    let dto = state.files.upload(file, user_id, account_id).await?;
    Ok((StatusCode::CREATED, Json(dto)))
}

fn parse_id(field: &str, raw: &str) -> Result<i32, JsonApiError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| JsonApiError::bad_request(format!("{field} must be an integer")))
}

#[utoipa::path(
    get, path = "/api/expense-files", tag = "expense-files",
    responses((status = 200, description = "OK", body = [crate::openapi::ExpenseFileDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ExpenseFileDto>>, JsonApiError> {
    Ok(Json(state.files.list().await?))
}

#[utoipa::path(
    get, path = "/api/expense-files/{id}/download", tag = "expense-files",
    params(("id" = i32, Path, description = "Expense file id")),
    responses(
        (status = 200, description = "File bytes as application/octet-stream"),
        (status = 404, description = "No such record"),
        (status = 410, description = "Record exists but the file is gone")
    )
)]
pub async fn download(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, JsonApiError> {
    let Path(id) = id?;
    let dl = state.files.download(id).await?;
    let headers = [
        (header::CONTENT_TYPE, "application/octet-stream".to_string()),
        (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", dl.file_name)),
    ];
    Ok((headers, Body::from_stream(ReaderStream::new(dl.file))))
}

#[utoipa::path(
    delete, path = "/api/expense-files/{id}", tag = "expense-files",
    params(("id" = i32, Path, description = "Expense file id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "No such record"))
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    state.files.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_rejects_non_numeric() {
        assert_eq!(parse_id("userId", " 12 ").unwrap(), 12);
        let err = parse_id("userId", "abc").unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message.as_deref(), Some("userId must be an integer"));
    }
}
