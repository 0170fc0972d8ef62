//! Error types and axum `IntoResponse` implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("origin not allowed: {0}")]
  OriginNotAllowed(String),
  #[error("invalid allowed origin {0:?}")]
  InvalidOrigin(String),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::OriginNotAllowed(_) => (
        StatusCode::FORBIDDEN,
        Json(json!({ "message": "Not allowed by CORS" })),
      )
        .into_response(),
      Error::InvalidOrigin(msg) => {
        (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
      }
    }
  }
}
