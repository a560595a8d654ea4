//! HTTP mapping for core errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use medrec_core::RecordError;

/// Wrapper giving [`RecordError`] an HTTP response shape.
///
/// Validation failures and duplicate codes become `400` with the descriptive
/// message in an `{ "error": ... }` body; unknown patients become `404`.
/// Anything else is logged and surfaced as an opaque `500`.
#[derive(Debug)]
pub struct ApiError(RecordError);

impl From<RecordError> for ApiError {
    fn from(err: RecordError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            RecordError::InvalidInput(_) | RecordError::DuplicateDiagnosis(_) => {
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }
            RecordError::PatientNotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),
            RecordError::Seed(_) => {
                tracing::error!("unexpected error: {:?}", self.0);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".into())
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_maps_to_bad_request() {
        let response =
            ApiError::from(RecordError::InvalidInput("incorrect or missing name".into()))
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_patient_maps_to_not_found() {
        let response =
            ApiError::from(RecordError::PatientNotFound(uuid::Uuid::new_v4())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
