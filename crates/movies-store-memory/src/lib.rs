//! In-memory backend for the movies store.
//!
//! Records live in a `Vec` behind a tokio `RwLock` for the lifetime of the
//! process. Nothing is persisted; a seed collection (bundled or read from a
//! JSON file) provides the initial contents.

mod seed;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::MemoryStore;

#[cfg(test)]
mod tests;
