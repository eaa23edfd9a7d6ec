// products_api/src/web/response.rs

//! The `{status, data, message}` envelope every product endpoint answers with.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

pub const LIST_OK: &str = "Products fetched successfully";
pub const CREATE_OK: &str = "Product created successfully";
pub const UPDATE_OK: &str = "Product updated successfully";
pub const DELETE_OK: &str = "Product deleted successfully";
pub const BAD_REQUEST: &str = "Invalid request";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Response envelope. `status` carries the outcome; `data` is `null` on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
  pub status: u16,
  pub data: Option<T>,
  pub message: String,
}

impl<T> ApiResponse<T> {
  pub fn ok(data: T, message: &str) -> Self {
    Self {
      status: StatusCode::OK.as_u16(),
      data: Some(data),
      message: message.to_string(),
    }
  }
}

impl ApiResponse<()> {
  pub fn bad_request() -> Self {
    Self::failure(StatusCode::BAD_REQUEST, BAD_REQUEST)
  }

  pub fn internal_error() -> Self {
    Self::failure(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
  }

  fn failure(status: StatusCode, message: &str) -> Self {
    Self {
      status: status.as_u16(),
      data: None,
      message: message.to_string(),
    }
  }
}

impl<T: Serialize> ApiResponse<T> {
  /// Serializes the envelope into a transport-level 200 response.
  pub fn into_http(self) -> HttpResponse {
    HttpResponse::Ok().json(self)
  }
}
