// products_api/src/state.rs
use crate::services::ProductStore;
use std::sync::Arc;

/// Shared with every handler through `web::Data`.
#[derive(Clone)]
pub struct AppState {
  pub product_store: Arc<dyn ProductStore>,
}

impl AppState {
  pub fn new(product_store: Arc<dyn ProductStore>) -> Self {
    Self { product_store }
  }
}
