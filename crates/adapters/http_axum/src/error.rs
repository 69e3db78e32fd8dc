//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use datadict_domain::error::DataDictError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`DataDictError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(DataDictError);

impl From<DataDictError> for ApiError {
    fn from(err: DataDictError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DataDictError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            DataDictError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            DataDictError::Source(err) => {
                tracing::error!(error = %err, "catalog source error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
