// products_api/src/web/handlers/product_handlers.rs

//! Product endpoints. Each handler decodes its input, makes exactly one
//! storage call and wraps the outcome in an [`ApiResponse`].
//!
//! Update and delete answer with the number of rows they touched. An id that
//! matches no live product yields `data: 0` with status 200; there is no
//! separate "not found" outcome.

use actix_web::{web, HttpResponse};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::models::ProductInput;
use crate::state::AppState;
use crate::web::response::{ApiResponse, CREATE_OK, DELETE_OK, LIST_OK, UPDATE_OK};

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state.product_store.list_all().await?;

  info!("Successfully fetched {} products.", products.len());
  Ok(ApiResponse::ok(products, LIST_OK).into_http())
}

#[instrument(name = "handler::create_product", skip(app_state, payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<ProductInput>,
) -> Result<HttpResponse, AppError> {
  let candidate = payload.into_inner();
  let rows_affected = app_state.product_store.create(&candidate).await?;

  info!(rows_affected, "Product created.");
  Ok(ApiResponse::ok(rows_affected, CREATE_OK).into_http())
}

#[instrument(name = "handler::update_product", skip(app_state, path, payload), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  payload: web::Json<ProductInput>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let patch = payload.into_inner();
  let rows_affected = app_state.product_store.update_partial(product_id, &patch).await?;

  if rows_affected == 0 {
    warn!("No live product with ID {} to update.", product_id);
  } else {
    info!("Product {} updated.", product_id);
  }
  Ok(ApiResponse::ok(rows_affected, UPDATE_OK).into_http())
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let rows_affected = app_state.product_store.soft_delete(product_id).await?;

  if rows_affected == 0 {
    warn!("No live product with ID {} to delete.", product_id);
  } else {
    info!("Product {} soft-deleted.", product_id);
  }
  Ok(ApiResponse::ok(rows_affected, DELETE_OK).into_http())
}
