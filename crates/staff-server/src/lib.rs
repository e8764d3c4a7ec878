//! Hosting layer for the employee service: configuration, store opening, and
//! the top-level HTTP router.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use axum::{Json, Router, routing::get};
use serde::Deserialize;
use serde_json::{Value, json};
use staff_core::service::EmployeeService;
use staff_store_sqlite::SqliteStore;
use tower_http::trace::TraceLayer;

/// Prefix for environment variable overrides, e.g. `STAFF_PORT=9000`.
pub const ENV_PREFIX: &str = "STAFF";

/// Opens an in-memory store instead of a file.
pub const IN_MEMORY: &str = ":memory:";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and the
/// environment.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub database_path: PathBuf,
}

impl ServerConfig {
  pub fn address(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

/// Layer the optional TOML file at `path` under `STAFF_*` environment
/// variables, on top of built-in defaults.
pub fn load_config(path: &Path) -> anyhow::Result<ServerConfig> {
  let settings = config::Config::builder()
    .set_default("host", "127.0.0.1")?
    .set_default("port", 8080)?
    .set_default("database_path", "staff.db")?
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix(ENV_PREFIX))
    .build()
    .context("failed to read config file")?;

  settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")
}

// ─── Store ────────────────────────────────────────────────────────────────────

/// Open the SQLite store named by `path`, creating it if needed.
pub async fn open_store(path: &Path) -> anyhow::Result<SqliteStore> {
  if path.as_os_str() == IN_MEMORY {
    tracing::warn!("using an in-memory store; data is lost on exit");
    return SqliteStore::open_in_memory()
      .await
      .context("failed to open in-memory store");
  }

  let path = expand_tilde(path);
  SqliteStore::open(&path)
    .await
    .with_context(|| format!("failed to open store at {path:?}"))
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the top-level router: the employee API under `/api` plus `/health`.
pub fn router(service: EmployeeService<SqliteStore>) -> Router {
  Router::new()
    .route("/health", get(health))
    .nest("/api", staff_api::api_router(service))
    .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<Value> {
  Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use tower::ServiceExt as _;

  use super::*;

  async fn make_service() -> EmployeeService<SqliteStore> {
    let store = open_store(Path::new(IN_MEMORY)).await.unwrap();
    EmployeeService::new(Arc::new(store))
  }

  #[tokio::test]
  async fn health_returns_ok() {
    let app = router(make_service().await);
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
  }

  #[tokio::test]
  async fn api_is_mounted_under_prefix() {
    let app = router(make_service().await);
    let req = Request::builder()
      .uri("/api/employees")
      .body(Body::empty())
      .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
  }

  #[test]
  fn missing_config_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = load_config(&dir.path().join("absent.toml")).unwrap();
    // Environment overrides may be set by the caller; only check shape.
    assert!(!cfg.host.is_empty());
    assert!(cfg.port > 0);
  }

  #[test]
  fn config_file_values_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
      &path,
      "host = \"0.0.0.0\"\nport = 9123\ndatabase_path = \"/tmp/employees.db\"\n",
    )
    .unwrap();

    let cfg = load_config(&path).unwrap();
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, 9123);
    assert_eq!(cfg.database_path, PathBuf::from("/tmp/employees.db"));
    assert_eq!(cfg.address(), "0.0.0.0:9123");
  }

  #[test]
  fn tilde_expands_to_home() {
    let Ok(home) = std::env::var("HOME") else { return };
    assert_eq!(
      expand_tilde(Path::new("~/staff.db")),
      PathBuf::from(home).join("staff.db")
    );
    assert_eq!(expand_tilde(Path::new("/abs/staff.db")), PathBuf::from("/abs/staff.db"));
  }
}
