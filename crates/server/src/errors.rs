use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::ServiceError;
use tracing::error;

/// Error body shared by every endpoint: `{"status", "error", "message"}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(message.into()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "status": self.status.as_u16(),
            "error": self.error,
            "message": self.message.unwrap_or_default(),
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation { .. } | ServiceError::InvalidInput(_) => {
                Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string()))
            }
            ServiceError::NotFound { .. } => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string())),
            ServiceError::FileNotOnDisk { .. } => Self::new(StatusCode::GONE, "File Not On Disk", Some(e.to_string())),
            ServiceError::StorageIo(_) | ServiceError::Db(_) => {
                error!(error = %e, "request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(e.to_string()))
            }
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self { Self::bad_request(r.body_text()) }
}

impl From<MultipartRejection> for JsonApiError {
    fn from(r: MultipartRejection) -> Self { Self::bad_request(r.body_text()) }
}

impl From<PathRejection> for JsonApiError {
    fn from(r: PathRejection) -> Self { Self::bad_request(r.body_text()) }
}

/// Keeps the status axum assigns, e.g. 413 once the body limit is hit.
impl From<MultipartError> for JsonApiError {
    fn from(e: MultipartError) -> Self {
        let status = e.status();
        Self::new(status, status.canonical_reason().unwrap_or("Bad Request"), Some(e.body_text()))
    }
}
