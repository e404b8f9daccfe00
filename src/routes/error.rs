use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;
use crate::models::ErrorResponse;
use crate::services::ExportError;

/// Errors surfaced to API callers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("At least one student preference is required")]
    EmptyPreferences,

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Requested {requested} classes, the maximum is {max}")]
    TooManyClasses { requested: usize, max: usize },

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Sort task failed: {0}")]
    Blocking(#[from] error::BlockingError),

    #[error("{message}")]
    Payload { kind: &'static str, message: String },
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::EmptyPreferences => "empty_preferences",
            ApiError::Validation(_) | ApiError::TooManyClasses { .. } => "validation_failed",
            ApiError::Export(_) => "unknown_export",
            ApiError::Blocking(_) => "internal_error",
            ApiError::Payload { kind, .. } => *kind,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Export(_) => StatusCode::NOT_FOUND,
            ApiError::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::Payload {
        kind: "invalid_json",
        message: format!("Invalid JSON: {}", err),
    }
    .into()
}

/// Handle path parameter errors
pub fn handle_path_error(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Path error on {}: {}", req.path(), err);
    ApiError::Payload {
        kind: "invalid_path",
        message: format!("Invalid path: {}", err),
    }
    .into()
}

/// JSON extractor config with JSON error bodies and a 16 MiB limit for CSV uploads
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(16 * 1024 * 1024)
        .error_handler(handle_json_payload_error)
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(handle_path_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::EmptyPreferences.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Export(ExportError::UnknownKind("x".into())).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::TooManyClasses { requested: 500, max: 100 }.to_string(),
            "Requested 500 classes, the maximum is 100"
        );
    }
}
