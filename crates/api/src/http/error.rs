use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use straycare_domain::StrayCareError;
use tracing::error;

/// Engine failure rendered as `500 {"error":"internal error"}`.
///
/// The cause is logged, never sent to the client.
#[derive(Debug)]
pub struct ApiError(pub StrayCareError);

impl From<StrayCareError> for ApiError {
    fn from(value: StrayCareError) -> Self {
        ApiError(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self.0, error_type = self.0.label(), "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "internal error" })))
            .into_response()
    }
}
