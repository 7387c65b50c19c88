// Route exports
pub mod matches;

use actix_web::{error, http::StatusCode, web, HttpRequest};

use crate::models::ErrorResponse;

pub use matches::{AppState, MatchLimits};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure),
    );
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ErrorResponse::new(StatusCode::BAD_REQUEST, "invalid_json", format!("Invalid JSON: {}", err)).into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ErrorResponse::new(StatusCode::BAD_REQUEST, "invalid_query", format!("Invalid query: {}", err)).into()
}

/// Handle path segment errors
pub fn handle_path_error(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Path error on {}: {}", req.path(), err);
    ErrorResponse::new(StatusCode::BAD_REQUEST, "invalid_path", format!("Invalid path: {}", err)).into()
}
