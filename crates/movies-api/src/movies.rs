//! Handlers for `/movies` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/movies` | Optional `?genre=`, matched case-insensitively |
//! | `GET`    | `/movies/:id` | 404 if not found |
//! | `POST`   | `/movies` | Body: full movie; returns 201 + stored movie |
//! | `DELETE` | `/movies/:id` | 404 if not found |
//! | `PATCH`  | `/movies/:id` | Body: partial movie; validated before lookup |
//!
//! An `:id` that is not a UUID cannot name a stored movie and is answered
//! like any other unknown id. An empty `?genre=` means no filter.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State, rejection::QueryRejection},
  http::StatusCode,
  response::IntoResponse,
};
use movies_core::{
  Movie,
  store::MovieStore,
  validate::{validate_full, validate_partial},
};
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::{error::ApiError, payload::Payload};

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
  Uuid::parse_str(raw).map_err(|_| ApiError::NotFound)
}

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub genre: Option<String>,
}

/// `GET /movies[?genre=<genre>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Movie>>, ApiError>
where
  S: MovieStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Query(params) = query?;
  let genre = params.genre.filter(|g| !g.is_empty());
  let movies = store
    .list(genre)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(movies))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /movies/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError>
where
  S: MovieStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let id = parse_id(&id)?;
  let movie = store
    .get(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or(ApiError::NotFound)?;
  Ok(Json(movie))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /movies` — returns 201 + the stored [`Movie`] with its new id.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Payload(payload): Payload,
) -> Result<impl IntoResponse, ApiError>
where
  S: MovieStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let movie = Movie::create(validate_full(&payload)?);

  store
    .insert(movie.clone())
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  tracing::info!(id = %movie.id, title = %movie.title, "movie created");
  Ok((StatusCode::CREATED, Json(movie)))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /movies/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Value>, ApiError>
where
  S: MovieStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let id = parse_id(&id)?;
  let removed = store
    .delete(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if !removed {
    return Err(ApiError::NotFound);
  }

  tracing::info!(%id, "movie deleted");
  Ok(Json(json!({ "message": "Movie deleted" })))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PATCH /movies/:id` — body is a partial movie; present fields overwrite.
///
/// The body is validated before the id is looked up, so an invalid body for
/// an unknown id is a 400, not a 404. An empty JSON body is an empty patch.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  Payload(payload): Payload,
) -> Result<Json<Movie>, ApiError>
where
  S: MovieStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let patch = validate_partial(&payload)?;

  let id = parse_id(&id)?;
  let movie = store
    .update(id, patch)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or(ApiError::NotFound)?;

  tracing::info!(%id, "movie updated");
  Ok(Json(movie))
}
