//! staff-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! SQLite employee store, and serves the REST API over HTTP.
//!
//! ```sh
//! STAFF_PORT=9000 cargo run -p staff-server -- --config config.toml
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use staff_core::service::EmployeeService;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Employee records REST server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let server_cfg = staff_server::load_config(&cli.config)?;

  let store = staff_server::open_store(&server_cfg.database_path).await?;
  tracing::info!(path = ?server_cfg.database_path, "employee store open");

  let service = EmployeeService::new(Arc::new(store));
  let app = staff_server::router(service);
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
