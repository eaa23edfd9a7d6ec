// products_api/src/main.rs

use std::sync::Arc;

use actix_web::middleware::NormalizePath;
use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

use products_api::services::SqliteProductStore;
use products_api::web::{configure_app_routes, cors_headers, routes};
use products_api::{db, AppConfig, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // RUST_LOG overrides the default `info` filter.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting products service...");

  let app_config = AppConfig::from_env().context("failed to load application configuration")?;

  // Storage problems at startup are fatal; there is no degraded mode.
  let db_pool = db::connect(&app_config.database_url, app_config.db_max_connections)
    .await
    .with_context(|| format!("failed to open database at {}", app_config.database_url))?;
  db::ensure_schema(&db_pool)
    .await
    .context("failed to ensure the products schema")?;

  let app_state = AppState::new(Arc::new(SqliteProductStore::new(db_pool)));

  routes::log_routes();
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(NormalizePath::trim())
      .wrap(cors_headers())
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("failed to bind {}", server_address))?
  .run()
  .await
  .context("HTTP server terminated with an error")
}
