//! Movie records and the inputs that create or change them.
//!
//! A [`Movie`] is only ever built from a validated [`NewMovie`] and only ever
//! changed by applying a validated [`MoviePatch`]; see
//! [`validate`](crate::validate).

use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use crate::genre::Genre;

/// A stored movie record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
  pub id:       Uuid,
  pub title:    String,
  pub year:     u16,
  pub director: String,
  /// Running time in minutes.
  pub duration: u64,
  pub poster:   String,
  pub genre:    Vec<Genre>,
  #[serde(serialize_with = "serialize_rate")]
  pub rate:     f64,
}

/// Whole-number rates go on the wire as integers (`5`, not `5.0`).
fn serialize_rate<S: Serializer>(rate: &f64, serializer: S) -> Result<S::Ok, S::Error> {
  if rate.fract() == 0.0 && rate.abs() <= i64::MAX as f64 {
    serializer.serialize_i64(*rate as i64)
  } else {
    serializer.serialize_f64(*rate)
  }
}

impl Movie {
  /// Assign a fresh v4 id to a validated payload.
  pub fn create(input: NewMovie) -> Self {
    Self::with_id(Uuid::new_v4(), input)
  }

  pub fn with_id(id: Uuid, input: NewMovie) -> Self {
    Movie {
      id,
      title: input.title,
      year: input.year,
      director: input.director,
      duration: input.duration,
      poster: input.poster,
      genre: input.genre,
      rate: input.rate,
    }
  }

  /// Shallow merge: every field present in `patch` overwrites the current
  /// value. `id` is never touched.
  pub fn apply(&mut self, patch: MoviePatch) {
    let MoviePatch {
      title,
      year,
      director,
      duration,
      poster,
      genre,
      rate,
    } = patch;

    if let Some(title) = title {
      self.title = title;
    }
    if let Some(year) = year {
      self.year = year;
    }
    if let Some(director) = director {
      self.director = director;
    }
    if let Some(duration) = duration {
      self.duration = duration;
    }
    if let Some(poster) = poster {
      self.poster = poster;
    }
    if let Some(genre) = genre {
      self.genre = genre;
    }
    if let Some(rate) = rate {
      self.rate = rate;
    }
  }

  /// Whether any of this movie's genres matches `filter`, ignoring case.
  pub fn has_genre(&self, filter: &str) -> bool {
    self.genre.iter().any(|g| g.matches(filter))
  }
}

/// A fully-validated, normalized create payload. `rate` is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
  pub title:    String,
  pub year:     u16,
  pub director: String,
  pub duration: u64,
  pub poster:   String,
  pub genre:    Vec<Genre>,
  pub rate:     f64,
}

/// A validated partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoviePatch {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title:    Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub year:     Option<u16>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub director: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub duration: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub poster:   Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub genre:    Option<Vec<Genre>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub rate:     Option<f64>,
}

impl MoviePatch {
  pub fn is_empty(&self) -> bool {
    *self == MoviePatch::default()
  }
}
