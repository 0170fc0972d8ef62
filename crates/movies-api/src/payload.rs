//! JSON request bodies for create and update.
//!
//! A request declaring a JSON content type with a zero-length body is read
//! as `{}`. Everything else goes through axum's [`Json`] extractor, so a
//! missing content type or malformed JSON is still rejected.

use axum::{
  Json,
  body::Body,
  extract::{FromRequest, Request},
  http::{HeaderMap, header},
};
use movies_core::validate::ValidationErrors;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Upper bound on buffered request bodies, matching axum's default limit.
const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// The raw JSON payload of a request, before validation.
#[derive(Debug)]
pub struct Payload(pub Value);

fn declares_json(headers: &HeaderMap) -> bool {
  headers
    .get(header::CONTENT_TYPE)
    .and_then(|v| v.to_str().ok())
    .is_some_and(|ct| ct.trim_start().starts_with("application/json"))
}

impl<S> FromRequest<S> for Payload
where
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    let is_json = declares_json(req.headers());
    let (parts, body) = req.into_parts();
    let bytes = axum::body::to_bytes(body, BODY_LIMIT).await.map_err(|e| {
      ApiError::Validation(ValidationErrors::single("body", e.to_string()))
    })?;

    if is_json && bytes.is_empty() {
      return Ok(Payload(Value::Object(Map::new())));
    }

    let req = Request::from_parts(parts, Body::from(bytes));
    let Json(value) = Json::<Value>::from_request(req, state).await?;
    Ok(Payload(value))
  }
}
