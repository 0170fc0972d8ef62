//! HTTP front door for the movies API.
//!
//! Wraps [`movies_api::api_router`] with the cross-origin policy and request
//! tracing, and owns the server configuration.

pub mod cors;
pub mod error;

pub use error::Error;

use std::{path::{Path, PathBuf}, sync::Arc};

use axum::{Router, middleware};
use movies_core::store::MovieStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use cors::OriginPolicy;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Environment variable prefix, e.g. `MOVIES_PORT=8080`.
pub const ENV_PREFIX: &str = "MOVIES";

/// Runtime server configuration, deserialised from `config.toml` and the
/// environment.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:            String,
  #[serde(default = "default_port")]
  pub port:            u16,
  /// Exact `Origin` values allowed to call the API.
  #[serde(default = "default_allowed_origins")]
  pub allowed_origins: Vec<String>,
  /// JSON array of movies to start with. The bundled seed is used if unset.
  #[serde(default)]
  pub seed_path:       Option<PathBuf>,
}

fn default_host() -> String {
  "127.0.0.1".to_string()
}

fn default_port() -> u16 {
  1234
}

fn default_allowed_origins() -> Vec<String> {
  [
    "http://localhost:8080",
    "http://localhost:1234",
    "http://movies.com",
    "http://midu.dev",
    "https://rest-api-deploy-nodejs.vercel.app",
    "https://rest-api-deploy-nodejs-git-master-mizamarzes-projects.vercel.app",
  ]
  .into_iter()
  .map(String::from)
  .collect()
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:            default_host(),
      port:            default_port(),
      allowed_origins: default_allowed_origins(),
      seed_path:       None,
    }
  }
}

impl ServerConfig {
  /// Read `path` (optional) and `MOVIES_*` environment variables.
  /// `MOVIES_ALLOWED_ORIGINS` is a comma-separated list.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(
        config::Environment::with_prefix(ENV_PREFIX)
          .try_parsing(true)
          .list_separator(",")
          .with_list_parse_key("allowed_origins"),
      )
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }

  pub fn origin_policy(&self) -> Result<OriginPolicy, Error> {
    OriginPolicy::new(self.allowed_origins.iter().cloned())
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the complete application: API routes, CORS headers, origin
/// enforcement, and request tracing (outermost).
pub fn router<S>(store: Arc<S>, policy: OriginPolicy) -> Router
where
  S: MovieStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  movies_api::api_router(store)
    .layer(policy.cors_layer())
    .layer(middleware::from_fn_with_state(policy, cors::enforce))
    .layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use movies_store_memory::MemoryStore;
  use serde_json::Value;
  use tower::ServiceExt as _;

  fn app() -> Router {
    let store = MemoryStore::seeded().unwrap();
    let policy = ServerConfig::default().origin_policy().unwrap();
    router(Arc::new(store), policy)
  }

  async fn get_movies(origin: Option<&str>) -> axum::response::Response {
    let mut builder = Request::builder().method("GET").uri("/movies");
    if let Some(origin) = origin {
      builder = builder.header(header::ORIGIN, origin);
    }
    app()
      .oneshot(builder.body(Body::empty()).unwrap())
      .await
      .unwrap()
  }

  // ── Origin policy ───────────────────────────────────────────────────────────

  #[tokio::test]
  async fn request_without_origin_is_served() {
    let resp = get_movies(None).await;
    assert_eq!(resp.status(), StatusCode::OK);
  }

  #[tokio::test]
  async fn allowed_origin_gets_cors_headers() {
    let resp = get_movies(Some("http://localhost:8080")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
      resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
      "http://localhost:8080"
    );
  }

  #[tokio::test]
  async fn unknown_origin_is_rejected() {
    let resp = get_movies(Some("http://evil.example")).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], "Not allowed by CORS");
  }

  #[tokio::test]
  async fn preflight_from_allowed_origin_lists_patch() {
    let req = Request::builder()
      .method("OPTIONS")
      .uri("/movies/dcdd0fad-a94c-4810-8acc-5f108d3b18c3")
      .header(header::ORIGIN, "http://movies.com")
      .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
      .body(Body::empty())
      .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert!(resp.status().is_success());
    let methods = resp
      .headers()
      .get(header::ACCESS_CONTROL_ALLOW_METHODS)
      .unwrap()
      .to_str()
      .unwrap();
    assert!(methods.contains("PATCH"), "{methods}");
  }

  #[tokio::test]
  async fn preflight_from_unknown_origin_is_rejected() {
    let req = Request::builder()
      .method("OPTIONS")
      .uri("/movies")
      .header(header::ORIGIN, "http://evil.example")
      .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
      .body(Body::empty())
      .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
  }

  #[tokio::test]
  async fn responses_do_not_identify_the_server() {
    let resp = get_movies(None).await;
    assert!(!resp.headers().contains_key(header::SERVER));
    assert!(!resp.headers().contains_key("x-powered-by"));
  }

  // ── Configuration ───────────────────────────────────────────────────────────

  #[test]
  fn empty_config_uses_defaults() {
    let cfg: ServerConfig = config::Config::builder()
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.address(), "127.0.0.1:1234");
    assert_eq!(cfg.allowed_origins.len(), 6);
    let policy = cfg.origin_policy().unwrap();
    assert!(policy.allows(Some("https://rest-api-deploy-nodejs.vercel.app")));
  }

  #[test]
  fn toml_overrides_defaults() {
    let toml = r#"
      port = 8080
      allowed_origins = ["https://movies.example"]
      seed_path = "/srv/movies.json"
    "#;
    let cfg: ServerConfig = config::Config::builder()
      .add_source(config::File::from_str(toml, config::FileFormat::Toml))
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.allowed_origins, vec!["https://movies.example"]);
    assert_eq!(cfg.seed_path, Some(PathBuf::from("/srv/movies.json")));

    let policy = cfg.origin_policy().unwrap();
    assert!(policy.allows(Some("https://movies.example")));
    assert!(!policy.allows(Some("http://movies.com")));
  }

  #[test]
  fn missing_config_file_is_not_an_error() {
    let cfg = ServerConfig::load(Path::new("/nonexistent/movies.toml")).unwrap();
    assert_eq!(cfg.host, ServerConfig::default().host);
  }
}
