// products_api/src/web/routes.rs

use actix_web::http::header;
use actix_web::http::Method;
use actix_web::middleware::DefaultHeaders;
use actix_web::{web, FromRequest, Handler, HttpRequest, HttpResponse, Responder};

use crate::errors::AppError;
use crate::web::handlers::product_handlers;

pub const API_SCOPE: &str = "/api";

/// Methods the product routes actually serve, advertised to preflight requests.
pub const CORS_ALLOW_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS";

/// One entry of the route table: registered on the `/api` scope and logged at startup.
pub struct ApiRoute {
  pub method: Method,
  pub path: &'static str,
  route: actix_web::Route,
}

fn api_route<F, Args>(method: Method, path: &'static str, handler: F) -> ApiRoute
where
  F: Handler<Args>,
  Args: FromRequest + 'static,
  F::Output: Responder + 'static,
{
  ApiRoute {
    route: web::method(method.clone()).to(handler),
    method,
    path,
  }
}

/// Every route under [`API_SCOPE`].
pub fn api_routes() -> Vec<ApiRoute> {
  vec![
    api_route(Method::GET, "/health", health_check_handler),
    api_route(Method::GET, "/products", product_handlers::list_products_handler),
    api_route(Method::POST, "/products", product_handlers::create_product_handler),
    api_route(Method::OPTIONS, "/products", preflight_handler),
    api_route(Method::PUT, "/products/{id}", product_handlers::update_product_handler),
    api_route(Method::DELETE, "/products/{id}", product_handlers::delete_product_handler),
    api_route(Method::OPTIONS, "/products/{id}", preflight_handler),
  ]
}

async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Answers CORS preflight requests, echoing back the requested headers.
async fn preflight_handler(req: HttpRequest) -> HttpResponse {
  let mut response = HttpResponse::NoContent();
  response.insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, CORS_ALLOW_METHODS));
  if let Some(requested) = req.headers().get(header::ACCESS_CONTROL_REQUEST_HEADERS) {
    response.insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, requested.clone()));
  }
  response.finish()
}

/// Middleware that lets any origin read responses.
pub fn cors_headers() -> DefaultHeaders {
  DefaultHeaders::new().add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
}

// Body and path extraction failures become bad-request envelopes.
fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err, _req| AppError::Decode(err.to_string()).into())
}

fn path_config() -> web::PathConfig {
  web::PathConfig::default().error_handler(|err, _req| AppError::Decode(err.to_string()).into())
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  let scope = web::scope(API_SCOPE).app_data(json_config()).app_data(path_config());
  let scope = api_routes()
    .into_iter()
    .fold(scope, |scope, api_route| scope.route(api_route.path, api_route.route));
  cfg.service(scope);
}

pub fn log_routes() {
  for api_route in api_routes() {
    tracing::info!(method = %api_route.method, path = %format!("{}{}", API_SCOPE, api_route.path), "Route registered");
  }
}
