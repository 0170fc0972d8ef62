//! JSON REST API for the movies collection.
//!
//! Exposes an axum [`Router`] backed by any [`movies_core::store::MovieStore`].
//! Cross-origin policy, tracing, and transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .merge(movies_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod movies;
pub mod payload;

use std::sync::Arc;

use axum::{Router, routing::get};
use movies_core::store::MovieStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: MovieStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/movies", get(movies::list::<S>).post(movies::create::<S>))
    .route(
      "/movies/{id}",
      get(movies::get_one::<S>)
        .delete(movies::delete_one::<S>)
        .patch(movies::update_one::<S>),
    )
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
