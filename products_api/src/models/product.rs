// products_api/src/models/product.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// A row of the `products` table.
///
/// The record-keeping fields keep the capitalized JSON keys existing clients
/// already read (`ID`, `CreatedAt`, `UpdatedAt`, `DeletedAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
  #[serde(rename = "ID")]
  pub id: i64,
  #[serde(rename = "CreatedAt")]
  pub created_at: DateTime<Utc>,
  #[serde(rename = "UpdatedAt")]
  pub updated_at: DateTime<Utc>,
  #[serde(rename = "DeletedAt")]
  pub deleted_at: Option<DateTime<Utc>>, // Set once the product is soft-deleted
  pub name: String,
  pub code: String,
  pub price: i64,
}

/// Write payload shared by create and update.
///
/// Every field is optional. On create a missing field is stored as its zero
/// value; on update a missing, empty or zero field leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProductInput {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub code: Option<String>,
  #[serde(default, deserialize_with = "non_negative_price")]
  pub price: Option<i64>,
}

/// Accepts any integer that fits the `price` column without going negative.
fn non_negative_price<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
  D: Deserializer<'de>,
{
  Option::<u64>::deserialize(deserializer)?
    .map(|price| i64::try_from(price).map_err(serde::de::Error::custom))
    .transpose()
}

impl ProductInput {
  pub fn new(name: impl Into<String>, code: impl Into<String>, price: i64) -> Self {
    Self {
      name: Some(name.into()),
      code: Some(code.into()),
      price: Some(price),
    }
  }

  /// Name to update, if the patch carries a non-empty one.
  pub fn name_change(&self) -> Option<&str> {
    self.name.as_deref().filter(|name| !name.is_empty())
  }

  /// Code to update, if the patch carries a non-empty one.
  pub fn code_change(&self) -> Option<&str> {
    self.code.as_deref().filter(|code| !code.is_empty())
  }

  /// Price to update, if the patch carries a non-zero one.
  pub fn price_change(&self) -> Option<i64> {
    self.price.filter(|price| *price != 0)
  }
}
