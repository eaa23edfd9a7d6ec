// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use async_trait::async_trait;
use once_cell::sync::Lazy;
use products_api::db;
use products_api::models::{Product, ProductInput};
use products_api::services::{ProductStore, SqliteProductStore, StoreError, StoreResult};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tempfile::TempDir;
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// A store backed by a fresh SQLite file. Keep the `TempDir` alive for the
/// duration of the test; dropping it removes the database.
pub async fn sqlite_store() -> (TempDir, SqliteProductStore) {
  let dir = tempfile::tempdir().unwrap();
  let url = format!("sqlite://{}", dir.path().join("products.db").display());
  let pool = db::connect(&url, 2).await.unwrap();
  db::ensure_schema(&pool).await.unwrap();
  (dir, SqliteProductStore::new(pool))
}

pub fn widget() -> ProductInput {
  ProductInput::new("Widget", "W-1", 500)
}

/// Reads a row regardless of its delete marker, bypassing the store.
pub async fn raw_product(store: &SqliteProductStore, id: i64) -> Option<Product> {
  sqlx::query_as("SELECT id, created_at, updated_at, deleted_at, name, code, price FROM products WHERE id = ?")
    .bind(id)
    .fetch_optional(store.pool())
    .await
    .unwrap()
}

pub async fn raw_row_count(store: &SqliteProductStore) -> i64 {
  sqlx::query_scalar("SELECT COUNT(*) FROM products")
    .fetch_one(store.pool())
    .await
    .unwrap()
}

// --- Test doubles ---

/// Fails every operation the way a dropped connection would.
pub struct FailingStore;

#[async_trait]
impl ProductStore for FailingStore {
  async fn list_all(&self) -> StoreResult<Vec<Product>> {
    Err(StoreError::Database(sqlx::Error::PoolClosed))
  }

  async fn create(&self, _candidate: &ProductInput) -> StoreResult<u64> {
    Err(StoreError::Database(sqlx::Error::PoolClosed))
  }

  async fn update_partial(&self, _id: i64, _patch: &ProductInput) -> StoreResult<u64> {
    Err(StoreError::Database(sqlx::Error::PoolClosed))
  }

  async fn soft_delete(&self, _id: i64) -> StoreResult<u64> {
    Err(StoreError::Database(sqlx::Error::PoolClosed))
  }
}

/// Counts calls and reports one affected row for every write.
#[derive(Default)]
pub struct CountingStore {
  pub calls: Arc<AtomicUsize>,
}

impl CountingStore {
  pub fn call_count(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl ProductStore for CountingStore {
  async fn list_all(&self) -> StoreResult<Vec<Product>> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    Ok(Vec::new())
  }

  async fn create(&self, _candidate: &ProductInput) -> StoreResult<u64> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    Ok(1)
  }

  async fn update_partial(&self, _id: i64, _patch: &ProductInput) -> StoreResult<u64> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    Ok(1)
  }

  async fn soft_delete(&self, _id: i64) -> StoreResult<u64> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    Ok(1)
  }
}
