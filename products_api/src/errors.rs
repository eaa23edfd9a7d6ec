// products_api/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::services::product_store::StoreError;
use crate::web::response::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
  /// The request body or path could not be decoded into the expected shape.
  #[error("Decode Error: {0}")]
  Decode(String),

  #[error("Storage Error: {0}")]
  Storage(#[from] StoreError),

  #[error("Configuration Error: {0}")]
  Config(String),
}

impl ResponseError for AppError {
  // Failures travel inside the envelope; the transport status stays 200.
  fn status_code(&self) -> StatusCode {
    StatusCode::OK
  }

  fn error_response(&self) -> HttpResponse {
    match self {
      AppError::Decode(detail) => {
        tracing::warn!(detail = %detail, "Rejecting undecodable request");
        ApiResponse::bad_request().into_http()
      }
      AppError::Storage(source) => {
        tracing::error!(application_error = %source, "Storage operation failed");
        ApiResponse::internal_error().into_http()
      }
      AppError::Config(detail) => {
        tracing::error!(application_error = %detail, "Configuration error reached a handler");
        ApiResponse::internal_error().into_http()
      }
    }
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
