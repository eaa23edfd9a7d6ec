// products_api/src/db.rs

//! Opening the SQLite pool and making sure the `products` table exists.

use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::info;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const SLOW_STATEMENT_THRESHOLD: Duration = Duration::from_secs(1);

const CREATE_PRODUCTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS products (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  created_at datetime,
  updated_at datetime,
  deleted_at datetime,
  name text UNIQUE,
  code text UNIQUE,
  price integer
)";

const CREATE_DELETED_AT_INDEX: &str =
  "CREATE INDEX IF NOT EXISTS idx_products_deleted_at ON products (deleted_at)";

/// Connection options for `database_url`: file created on demand, WAL
/// journaling, statement logging at INFO and slow statements at WARN.
pub fn connect_options(database_url: &str) -> Result<SqliteConnectOptions, sqlx::Error> {
  let options = SqliteConnectOptions::from_str(database_url)?
    .create_if_missing(true)
    .journal_mode(SqliteJournalMode::Wal)
    .synchronous(SqliteSynchronous::Normal)
    .busy_timeout(BUSY_TIMEOUT)
    .log_statements(LevelFilter::Info)
    .log_slow_statements(LevelFilter::Warn, SLOW_STATEMENT_THRESHOLD);
  Ok(options)
}

pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
  let pool = SqlitePoolOptions::new()
    .max_connections(max_connections)
    .connect_with(connect_options(database_url)?)
    .await?;
  info!(database_url, max_connections, "Successfully connected to the database.");
  Ok(pool)
}

/// Creates the `products` table and its `deleted_at` index when missing.
/// Safe to run on every start.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
  sqlx::query(CREATE_PRODUCTS_TABLE).execute(pool).await?;
  sqlx::query(CREATE_DELETED_AT_INDEX).execute(pool).await?;
  info!("Products schema is in place.");
  Ok(())
}
