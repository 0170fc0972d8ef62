//! Payload validation for movie create and update requests.
//!
//! The schema is a table of [`FieldRule`] descriptors ([`MOVIE_RULES`])
//! interpreted by a single generic checker. A successful check yields a
//! normalized JSON object (integers as integers, unknown keys dropped) which
//! is then typed into [`NewMovie`] or [`MoviePatch`].
//!
//! Defaulting is not part of the rule table: [`normalize_rate`] runs after a
//! full validation succeeds.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use thiserror::Error;
use url::Url;

use crate::{
  genre::Genre,
  movie::{MoviePatch, NewMovie},
};

/// `rate` assigned to a created movie that does not carry one.
pub const DEFAULT_RATE: f64 = 5.0;

/// Largest integer a JSON client can represent exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// One violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
  pub field:   String,
  pub message: String,
}

impl FieldError {
  pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      field:   field.into(),
      message: message.into(),
    }
  }
}

/// Every constraint a payload violated, in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(transparent)]
#[error("invalid movie payload ({} violation(s))", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
  pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
    Self(vec![FieldError::new(field, message)])
  }

  pub fn errors(&self) -> &[FieldError] {
    &self.0
  }

  /// Names of the violated fields, one per violation.
  pub fn fields(&self) -> impl Iterator<Item = &str> {
    self.0.iter().map(|e| e.field.as_str())
  }

  pub fn has_field(&self, field: &str) -> bool {
    self.fields().any(|f| f == field)
  }
}

// ─── Rules ───────────────────────────────────────────────────────────────────

/// The JSON shape a field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
  Text,
  Integer,
  Number,
  /// A string that parses as an absolute URL.
  Url,
  /// An array of [`Genre`] names.
  Genres,
}

/// Declarative description of one field's constraints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
  pub name:     &'static str,
  pub kind:     FieldKind,
  pub required: bool,
  pub positive: bool,
  pub min:      Option<f64>,
  pub max:      Option<f64>,
}

impl FieldRule {
  pub const fn required(name: &'static str, kind: FieldKind) -> Self {
    Self {
      name,
      kind,
      required: true,
      positive: false,
      min: None,
      max: None,
    }
  }

  pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
    Self {
      required: false,
      ..Self::required(name, kind)
    }
  }

  pub const fn positive(self) -> Self {
    Self {
      positive: true,
      ..self
    }
  }

  /// Inclusive numeric bounds.
  pub const fn range(self, min: f64, max: f64) -> Self {
    Self {
      min: Some(min),
      max: Some(max),
      ..self
    }
  }

  fn error(&self, message: impl std::fmt::Display) -> FieldError {
    FieldError::new(self.name, format!("{} {message}", self.name))
  }

  /// Check `value` against this rule, pushing one error per violated
  /// constraint. Returns the normalized value when nothing was violated.
  fn check(&self, value: &Value, errors: &mut Vec<FieldError>) -> Option<Value> {
    let before = errors.len();

    let normalized = match self.kind {
      FieldKind::Text => {
        let Some(text) = value.as_str() else {
          errors.push(self.error("must be a string"));
          return None;
        };
        Value::from(text)
      }
      FieldKind::Url => {
        let Some(text) = value.as_str() else {
          errors.push(self.error("must be a string"));
          return None;
        };
        if Url::parse(text).is_err() {
          errors.push(self.error("must be a valid URL"));
        }
        Value::from(text)
      }
      FieldKind::Integer | FieldKind::Number => {
        let Some(n) = value.as_f64() else {
          errors.push(self.error("must be a number"));
          return None;
        };
        let integral = n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER;
        if self.kind == FieldKind::Integer && !integral {
          errors.push(self.error("must be an integer"));
        }
        self.check_bounds(n, errors);
        if self.kind == FieldKind::Integer {
          Value::from(n as i64)
        } else {
          value.clone()
        }
      }
      FieldKind::Genres => {
        let Some(items) = value.as_array() else {
          errors.push(self.error("must be an array of genres"));
          return None;
        };
        for (i, item) in items.iter().enumerate() {
          match item.as_str().map(Genre::from_name) {
            Some(Ok(_)) => {}
            Some(Err(e)) => errors.push(FieldError::new(
              self.name,
              format!("{e} at index {i}; expected one of {}", Genre::names().join(", ")),
            )),
            None => errors.push(FieldError::new(
              self.name,
              format!("{}[{i}] must be a string", self.name),
            )),
          }
        }
        value.clone()
      }
    };

    (errors.len() == before).then_some(normalized)
  }

  fn check_bounds(&self, n: f64, errors: &mut Vec<FieldError>) {
    if self.positive && n <= 0.0 {
      errors.push(self.error("must be positive"));
    }
    if let Some(min) = self.min
      && n < min
    {
      errors.push(self.error(format_args!("must be at least {min}")));
    }
    if let Some(max) = self.max
      && n > max
    {
      errors.push(self.error(format_args!("cannot exceed {max}")));
    }
  }
}

/// The movie schema. Order determines error order.
pub const MOVIE_RULES: &[FieldRule] = &[
  FieldRule::required("title", FieldKind::Text),
  FieldRule::required("year", FieldKind::Integer)
    .positive()
    .range(1900.0, 2025.0),
  FieldRule::required("director", FieldKind::Text),
  FieldRule::required("duration", FieldKind::Integer).positive(),
  FieldRule::required("poster", FieldKind::Url),
  FieldRule::required("genre", FieldKind::Genres),
  FieldRule::optional("rate", FieldKind::Number).range(0.0, 10.0),
];

// ─── Checker ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presence {
  /// Required rules must be present.
  Enforced,
  /// Every rule is optional.
  Relaxed,
}

/// Run `rules` over `payload`, returning the normalized known fields.
pub fn check(
  payload: &Value,
  rules: &[FieldRule],
) -> Result<Map<String, Value>, ValidationErrors> {
  check_with(payload, rules, Presence::Enforced)
}

fn check_with(
  payload: &Value,
  rules: &[FieldRule],
  presence: Presence,
) -> Result<Map<String, Value>, ValidationErrors> {
  let Some(object) = payload.as_object() else {
    return Err(ValidationErrors::single("body", "body must be a JSON object"));
  };

  let mut errors = Vec::new();
  let mut normalized = Map::new();

  for rule in rules {
    match object.get(rule.name) {
      None => {
        if rule.required && presence == Presence::Enforced {
          errors.push(rule.error("is required"));
        }
      }
      Some(value) => {
        if let Some(value) = rule.check(value, &mut errors) {
          normalized.insert(rule.name.to_owned(), value);
        }
      }
    }
  }

  if errors.is_empty() {
    Ok(normalized)
  } else {
    Err(ValidationErrors(errors))
  }
}

/// Insert [`DEFAULT_RATE`] when `rate` is absent.
pub fn normalize_rate(fields: &mut Map<String, Value>) {
  fields
    .entry("rate")
    .or_insert_with(|| Value::from(DEFAULT_RATE));
}

fn into_typed<T: DeserializeOwned>(
  fields: Map<String, Value>,
) -> Result<T, ValidationErrors> {
  serde_json::from_value(Value::Object(fields))
    .map_err(|e| ValidationErrors::single("body", e.to_string()))
}

/// Validate a create payload. Every required field must be present.
pub fn validate_full(payload: &Value) -> Result<NewMovie, ValidationErrors> {
  let mut fields = check(payload, MOVIE_RULES)?;
  normalize_rate(&mut fields);
  into_typed(fields)
}

/// Validate a partial-update payload. Only fields present are checked.
pub fn validate_partial(payload: &Value) -> Result<MoviePatch, ValidationErrors> {
  let fields = check_with(payload, MOVIE_RULES, Presence::Relaxed)?;
  into_typed(fields)
}
