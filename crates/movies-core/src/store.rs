//! The `MovieStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `movies-store-memory`).
//! The HTTP layer depends on this abstraction, not on any concrete backend.
//! Backends store what they are given: payload validation happens before a
//! store is called.

use std::future::Future;

use uuid::Uuid;

use crate::movie::{Movie, MoviePatch};

/// Abstraction over an ordered collection of movie records.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait MovieStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// All movies in insertion order, or only those having a genre equal to
  /// `genre` under case-insensitive comparison.
  fn list(
    &self,
    genre: Option<String>,
  ) -> impl Future<Output = Result<Vec<Movie>, Self::Error>> + Send + '_;

  /// Retrieve a movie by id. Returns `None` if not found.
  fn get(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Movie>, Self::Error>> + Send + '_;

  /// Append `movie`. The caller is responsible for supplying a fresh id.
  fn insert(
    &self,
    movie: Movie,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Remove the movie with `id`. Returns whether a record was removed.
  fn delete(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Merge `patch` into the movie with `id` and return the updated record,
  /// or `None` if not found.
  fn update(
    &self,
    id: Uuid,
    patch: MoviePatch,
  ) -> impl Future<Output = Result<Option<Movie>, Self::Error>> + Send + '_;
}
