// products_api/src/services/mod.rs

pub mod product_store;

pub use product_store::{ProductStore, SqliteProductStore, StoreError, StoreResult};
