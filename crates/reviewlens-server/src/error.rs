use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reviewlens_core::errors::ErrorCode;
use reviewlens_pipeline::AnalyzeError;
use serde_json::json;
use tracing::{error, warn};

/// HTTP face of [`AnalyzeError`]: its status and an `{"error": message}` body.
#[derive(Debug)]
pub struct ApiError(pub AnalyzeError);

impl From<AnalyzeError> for ApiError {
    fn from(err: AnalyzeError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(code = self.0.error_code(), error = %self.0, "request failed");
        } else {
            warn!(code = self.0.error_code(), error = %self.0, "request rejected");
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
