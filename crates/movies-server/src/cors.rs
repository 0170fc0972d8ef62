//! Cross-origin policy.
//!
//! Requests without an `Origin` header are always served. Requests whose
//! `Origin` is on the allow-list are served and receive CORS response headers
//! (preflights included). Every other origin is rejected with 403 before any
//! handler runs.

use std::{collections::HashSet, sync::Arc};

use axum::{
  extract::{Request, State},
  http::{HeaderValue, Method, header},
  middleware::Next,
  response::{IntoResponse, Response},
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::error::Error;

/// The set of origins allowed to call the API.
#[derive(Debug, Clone)]
pub struct OriginPolicy {
  allowed: Arc<HashSet<String>>,
}

impl OriginPolicy {
  /// Build a policy from origin strings, rejecting any that cannot be sent
  /// back as a header value.
  pub fn new<I, O>(origins: I) -> Result<Self, Error>
  where
    I: IntoIterator<Item = O>,
    O: Into<String>,
  {
    let allowed = origins
      .into_iter()
      .map(Into::into)
      .map(|origin: String| match HeaderValue::from_str(&origin) {
        Ok(_) => Ok(origin),
        Err(_) => Err(Error::InvalidOrigin(origin)),
      })
      .collect::<Result<HashSet<_>, _>>()?;
    Ok(Self {
      allowed: Arc::new(allowed),
    })
  }

  /// Exact-match check. A missing origin is always allowed.
  pub fn allows(&self, origin: Option<&str>) -> bool {
    origin.is_none_or(|o| self.allowed.contains(o))
  }

  /// CORS response headers for allowed origins.
  pub fn cors_layer(&self) -> CorsLayer {
    let origins = self
      .allowed
      .iter()
      .filter_map(|o| HeaderValue::from_str(o).ok())
      .collect::<Vec<_>>();

    CorsLayer::new()
      .allow_origin(AllowOrigin::list(origins))
      .allow_methods([
        Method::GET,
        Method::HEAD,
        Method::POST,
        Method::PATCH,
        Method::DELETE,
      ])
      .allow_headers([header::CONTENT_TYPE])
  }
}

/// Middleware rejecting requests from origins outside `policy`.
pub async fn enforce(
  State(policy): State<OriginPolicy>,
  req: Request,
  next: Next,
) -> Response {
  let origin = req
    .headers()
    .get(header::ORIGIN)
    .map(|v| v.to_str().unwrap_or_default());

  if !policy.allows(origin) {
    let origin = origin.unwrap_or_default().to_owned();
    tracing::warn!(%origin, "rejected cross-origin request");
    return Error::OriginNotAllowed(origin).into_response();
  }

  next.run(req).await
}
