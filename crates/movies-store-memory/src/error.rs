//! Error type for `movies-store-memory`.

use movies_core::validate::ValidationErrors;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to read seed file: {0}")]
  Io(#[from] std::io::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("seed record {index} has no valid `id`")]
  MissingId { index: usize },

  #[error("seed record {index} is invalid: {source}")]
  InvalidSeed {
    index:  usize,
    #[source]
    source: ValidationErrors,
  },

  #[error("duplicate movie id in seed: {0}")]
  DuplicateId(Uuid),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
