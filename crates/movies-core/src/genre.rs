//! The closed set of genres a movie may be tagged with.

use std::str::FromStr as _;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantNames};

use crate::{Error, Result};

/// A movie genre. The wire name of every variant is its display name, so
/// `SciFi` travels as `"Sci-Fi"`.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  AsRefStr,
  Display,
  EnumString,
  VariantNames,
)]
pub enum Genre {
  Action,
  Adventure,
  Comedy,
  Drama,
  Fantasy,
  Horror,
  Thriller,
  #[serde(rename = "Sci-Fi")]
  #[strum(serialize = "Sci-Fi")]
  SciFi,
  Crime,
}

impl Genre {
  /// Parse an exact (case-sensitive) genre name.
  pub fn from_name(name: &str) -> Result<Self> {
    Self::from_str(name).map_err(|_| Error::UnknownGenre(name.to_owned()))
  }

  /// Case-insensitive comparison against a free-form filter string.
  pub fn matches(&self, filter: &str) -> bool {
    self.as_ref().to_lowercase() == filter.to_lowercase()
  }

  /// All genre names, in declaration order.
  pub fn names() -> &'static [&'static str] {
    Self::VARIANTS
  }
}
