//! [`MemoryStore`] — the in-memory implementation of [`MovieStore`].

use std::{future::Future, path::Path, sync::Arc};

use movies_core::{Movie, MoviePatch, store::MovieStore};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{Error, Result, seed};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An ordered movie collection held in process memory.
///
/// Cloning is cheap — clones share the same underlying list.
#[derive(Clone, Default)]
pub struct MemoryStore {
  movies: Arc<RwLock<Vec<Movie>>>,
}

impl MemoryStore {
  /// An empty store.
  pub fn new() -> Self {
    Self::default()
  }

  /// A store holding `movies`, in the given order.
  pub fn with_movies(movies: Vec<Movie>) -> Self {
    Self {
      movies: Arc::new(RwLock::new(movies)),
    }
  }

  /// A store initialised from the bundled seed collection.
  pub fn seeded() -> Result<Self> {
    Ok(Self::with_movies(seed::bundled()?))
  }

  /// A store initialised from a JSON array of movie records at `path`.
  pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
    let json = tokio::fs::read_to_string(path).await?;
    Self::from_json_str(&json)
  }

  /// A store initialised from a JSON array of movie records.
  pub fn from_json_str(json: &str) -> Result<Self> {
    Ok(Self::with_movies(seed::parse(json)?))
  }

  /// Number of stored movies.
  pub async fn len(&self) -> usize {
    self.movies.read().await.len()
  }

  pub async fn is_empty(&self) -> bool {
    self.movies.read().await.is_empty()
  }
}

// ─── MovieStore impl ─────────────────────────────────────────────────────────

impl MovieStore for MemoryStore {
  type Error = Error;

  fn list(
    &self,
    genre: Option<String>,
  ) -> impl Future<Output = Result<Vec<Movie>>> + Send + '_ {
    async move {
      let movies = self.movies.read().await;
      let listed = match genre {
        Some(genre) => movies
          .iter()
          .filter(|m| m.has_genre(&genre))
          .cloned()
          .collect(),
        None => movies.clone(),
      };
      Ok(listed)
    }
  }

  fn get(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Movie>>> + Send + '_ {
    async move {
      let movies = self.movies.read().await;
      Ok(movies.iter().find(|m| m.id == id).cloned())
    }
  }

  fn insert(&self, movie: Movie) -> impl Future<Output = Result<()>> + Send + '_ {
    async move {
      self.movies.write().await.push(movie);
      Ok(())
    }
  }

  fn delete(&self, id: Uuid) -> impl Future<Output = Result<bool>> + Send + '_ {
    async move {
      let mut movies = self.movies.write().await;
      match movies.iter().position(|m| m.id == id) {
        Some(index) => {
          movies.remove(index);
          Ok(true)
        }
        None => Ok(false),
      }
    }
  }

  fn update(
    &self,
    id: Uuid,
    patch: MoviePatch,
  ) -> impl Future<Output = Result<Option<Movie>>> + Send + '_ {
    async move {
      let mut movies = self.movies.write().await;
      let Some(movie) = movies.iter_mut().find(|m| m.id == id) else {
        return Ok(None);
      };
      movie.apply(patch);
      Ok(Some(movie.clone()))
    }
  }
}
