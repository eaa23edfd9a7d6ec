// products_api/src/services/product_store.rs

//! The storage adapter: the only code that talks to the `products` table.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{Product, ProductInput};

#[derive(Debug, Error)]
pub enum StoreError {
  /// A `name` or `code` already exists in the table, deleted rows included.
  #[error("unique constraint violated: {source}")]
  UniqueViolation { source: sqlx::Error },

  #[error("database error: {0}")]
  Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
  fn from(err: sqlx::Error) -> Self {
    let unique = matches!(&err, sqlx::Error::Database(db_err) if db_err.is_unique_violation());
    if unique {
      StoreError::UniqueViolation { source: err }
    } else {
      StoreError::Database(err)
    }
  }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Operations the product handlers need from storage.
///
/// Update and delete report how many rows they touched. Zero rows is a
/// successful outcome, not a "not found" error.
#[async_trait]
pub trait ProductStore: Send + Sync {
  /// Every product that has not been soft-deleted, by ascending id.
  async fn list_all(&self) -> StoreResult<Vec<Product>>;

  /// Inserts one product. Missing fields are stored as their zero value.
  async fn create(&self, candidate: &ProductInput) -> StoreResult<u64>;

  /// Overwrites only the non-empty fields of `patch` on the live row `id`.
  async fn update_partial(&self, id: i64, patch: &ProductInput) -> StoreResult<u64>;

  /// Stamps `deleted_at` on the live row `id`; the row itself is kept.
  async fn soft_delete(&self, id: i64) -> StoreResult<u64>;
}

const SELECT_LIVE_PRODUCTS: &str = "SELECT id, created_at, updated_at, deleted_at, name, code, price \
   FROM products WHERE deleted_at IS NULL ORDER BY id ASC";

const INSERT_PRODUCT: &str = "INSERT INTO products (created_at, updated_at, deleted_at, name, code, price) \
   VALUES (?, ?, NULL, ?, ?, ?)";

const SOFT_DELETE_PRODUCT: &str = "UPDATE products SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL";

#[derive(Debug, Clone)]
pub struct SqliteProductStore {
  pool: SqlitePool,
}

impl SqliteProductStore {
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }

  pub fn pool(&self) -> &SqlitePool {
    &self.pool
  }
}

#[async_trait]
impl ProductStore for SqliteProductStore {
  #[instrument(name = "store::list_all", skip(self), err(Display))]
  async fn list_all(&self) -> StoreResult<Vec<Product>> {
    let products: Vec<Product> = sqlx::query_as(SELECT_LIVE_PRODUCTS).fetch_all(&self.pool).await?;
    debug!(count = products.len(), "Loaded live products.");
    Ok(products)
  }

  #[instrument(name = "store::create", skip(self, candidate), err(Display))]
  async fn create(&self, candidate: &ProductInput) -> StoreResult<u64> {
    let now = Utc::now();
    let result = sqlx::query(INSERT_PRODUCT)
      .bind(now)
      .bind(now)
      .bind(candidate.name.as_deref().unwrap_or_default())
      .bind(candidate.code.as_deref().unwrap_or_default())
      .bind(candidate.price.unwrap_or_default())
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected())
  }

  #[instrument(name = "store::update_partial", skip(self, patch), err(Display))]
  async fn update_partial(&self, id: i64, patch: &ProductInput) -> StoreResult<u64> {
    let mut query = QueryBuilder::<Sqlite>::new("UPDATE products SET updated_at = ");
    query.push_bind(Utc::now());
    if let Some(name) = patch.name_change() {
      query.push(", name = ").push_bind(name);
    }
    if let Some(code) = patch.code_change() {
      query.push(", code = ").push_bind(code);
    }
    if let Some(price) = patch.price_change() {
      query.push(", price = ").push_bind(price);
    }
    query.push(" WHERE id = ").push_bind(id).push(" AND deleted_at IS NULL");

    let result = query.build().execute(&self.pool).await?;
    Ok(result.rows_affected())
  }

  #[instrument(name = "store::soft_delete", skip(self), err(Display))]
  async fn soft_delete(&self, id: i64) -> StoreResult<u64> {
    let result = sqlx::query(SOFT_DELETE_PRODUCT)
      .bind(Utc::now())
      .bind(id)
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected())
  }
}
