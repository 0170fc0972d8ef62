//! Core types and trait definitions for the movies service.
//!
//! This crate is deliberately free of HTTP and storage dependencies. The
//! record model, the payload validator and the [`store::MovieStore`]
//! abstraction live here; backends and the HTTP layer depend on it.

pub mod error;
pub mod genre;
pub mod movie;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
pub use genre::Genre;
pub use movie::{Movie, MoviePatch, NewMovie};
