//! Error types for `movies-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown genre: {0:?}")]
  UnknownGenre(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
