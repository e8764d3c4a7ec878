//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Rendered as a bare 404 with an empty body.
  #[error("not found: {0}")]
  NotFound(String),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<staff_core::Error> for ApiError {
  fn from(err: staff_core::Error) -> Self {
    use staff_core::Error as CoreError;
    match err {
      // Duplicate email on create is a conflict, not a missing resource.
      e @ CoreError::DuplicateEmail(_) => ApiError::Conflict(e.to_string()),
      e @ CoreError::EmployeeNotFound(_) => ApiError::NotFound(e.to_string()),
      e @ CoreError::InvalidEmployee(_) => ApiError::BadRequest(e.to_string()),
      CoreError::Store(e) => ApiError::Store(e),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => {
        tracing::debug!("{m}");
        return StatusCode::NOT_FOUND.into_response();
      }
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
