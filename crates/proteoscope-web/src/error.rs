//! HTTP error mapping for the shared error taxonomy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use proteoscope_common::error::ProteoscopeError;

/// Wraps [`ProteoscopeError`] so handlers can use `?` and still produce a
/// meaningful HTTP status: unknown genes are a 404, ambiguous symbols a
/// 409, everything else a 500.
#[derive(Debug)]
pub struct ApiError(ProteoscopeError);

impl From<ProteoscopeError> for ApiError {
    fn from(e: ProteoscopeError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ProteoscopeError::GeneNotFound(_) => StatusCode::NOT_FOUND,
            ProteoscopeError::AmbiguousGene(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self.0, "request failed");
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
