//! Seed collections: the bundled default and user-supplied JSON arrays.
//!
//! Seed records go through the same validation as create payloads; only the
//! `id` is taken from the file instead of being generated.

use std::collections::HashSet;

use movies_core::{Movie, validate::validate_full};
use serde_json::Value;
use uuid::Uuid;

use crate::{Error, Result};

const BUNDLED: &str = include_str!("../seed/movies.json");

pub(crate) fn bundled() -> Result<Vec<Movie>> {
  parse(BUNDLED)
}

/// Parse a JSON array of movie records, rejecting invalid or duplicate ids.
pub(crate) fn parse(json: &str) -> Result<Vec<Movie>> {
  let records: Vec<Value> = serde_json::from_str(json)?;
  let mut seen = HashSet::with_capacity(records.len());

  records
    .into_iter()
    .enumerate()
    .map(|(index, record)| {
      let id = record
        .get("id")
        .and_then(Value::as_str)
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or(Error::MissingId { index })?;

      if !seen.insert(id) {
        return Err(Error::DuplicateId(id));
      }

      let input = validate_full(&record)
        .map_err(|source| Error::InvalidSeed { index, source })?;
      Ok(Movie::with_id(id, input))
    })
    .collect()
}
