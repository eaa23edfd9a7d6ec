// products_api/src/lib.rs

//! HTTP service exposing list/create/update/delete over a SQLite-backed
//! `products` table. Every endpoint answers with the same
//! `{status, data, message}` envelope.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
