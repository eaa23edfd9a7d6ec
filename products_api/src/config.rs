// products_api/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://database.db";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub db_max_connections: u32,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server_host: DEFAULT_SERVER_HOST.to_string(),
      server_port: DEFAULT_SERVER_PORT,
      database_url: DEFAULT_DATABASE_URL.to_string(),
      db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
    }
  }
}

impl AppConfig {
  /// Builds the configuration from the fixed defaults, letting the
  /// environment (or a `.env` file) override any of them.
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| env::var(var_name).ok().filter(|value| !value.trim().is_empty());
    let defaults = Self::default();

    let server_host = get_env("SERVER_HOST").unwrap_or(defaults.server_host);
    let server_port = match get_env("SERVER_PORT") {
      Some(raw) => raw
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT '{}': {}", raw, e)))?,
      None => defaults.server_port,
    };
    let database_url = get_env("DATABASE_URL").unwrap_or(defaults.database_url);
    let db_max_connections = match get_env("DB_MAX_CONNECTIONS") {
      Some(raw) => match raw.parse::<u32>() {
        Ok(0) => return Err(AppError::Config("DB_MAX_CONNECTIONS must be at least 1".to_string())),
        Ok(n) => n,
        Err(e) => return Err(AppError::Config(format!("Invalid DB_MAX_CONNECTIONS '{}': {}", raw, e))),
      },
      None => defaults.db_max_connections,
    };

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      db_max_connections,
    })
  }
}
