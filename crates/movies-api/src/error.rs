//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::{JsonRejection, QueryRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use movies_core::validate::ValidationErrors;
use serde_json::json;
use thiserror::Error;

/// Body of every 404 response.
pub const NOT_FOUND_MESSAGE: &str = "Movie not found";

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("movie not found")]
  NotFound,

  #[error(transparent)]
  Validation(#[from] ValidationErrors),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::Validation(ValidationErrors::single(
      "body",
      rejection.body_text(),
    ))
  }
}

impl From<QueryRejection> for ApiError {
  fn from(rejection: QueryRejection) -> Self {
    ApiError::Validation(ValidationErrors::single(
      "query",
      rejection.body_text(),
    ))
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::NotFound => (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": NOT_FOUND_MESSAGE })),
      )
        .into_response(),
      ApiError::Validation(errors) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": errors })))
          .into_response()
      }
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({ "message": e.to_string() })),
        )
          .into_response()
      }
    }
  }
}
