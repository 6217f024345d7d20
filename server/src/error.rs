//! Errors surfaced to HTTP callers.

use actix_web::{
    error::JsonPayloadError, http::StatusCode, web, HttpRequest, HttpResponse, ResponseError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("method not allowed")]
    MethodNotAllowed,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}

/// JSON extractor settings shared by every endpoint.
///
/// The game host does not always send `Content-Type: application/json`, so the
/// header is not required.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(json_error)
}

fn json_error(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("rejecting body for {}: {err}", req.path());
    ApiError::BadRequest(err.to_string()).into()
}

/// Fallback handler for resources hit with the wrong verb.
pub async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed)
}
