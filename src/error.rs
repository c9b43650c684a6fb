use crate::models::ErrorResponse;
use crate::services::GatewayError;
use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;

/// Message returned for every model gateway failure
pub const MODEL_UNAVAILABLE: &str = "Error communicating with AI model.";

/// Errors surfaced at the HTTP boundary
///
/// Only these classified kinds reach the client; anything else is wrapped
/// in `Internal`, whose cause is logged and never returned.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Incorrect password")]
    Unauthorized,

    #[error("Server configuration error")]
    Configuration,

    #[error("{0}")]
    Upstream(String),

    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_failed",
            ApiError::Unauthorized => "unauthorized",
            ApiError::Configuration => "configuration_error",
            ApiError::Upstream(_) => "upstream_failure",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        tracing::error!("Model gateway call failed: {}", err);
        ApiError::Upstream(MODEL_UNAVAILABLE.to_string())
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Configuration | ApiError::Upstream(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(cause) = self {
            tracing::error!("Internal error: {}", cause);
        }

        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.code().to_string(),
            detail: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    match err {
        error::JsonPayloadError::Deserialize(e) => {
            ApiError::Validation(format!("Invalid request body: {}", e))
        }
        error::JsonPayloadError::ContentType => {
            ApiError::Validation("Content type must be application/json".to_string())
        }
        error::JsonPayloadError::Overflow { .. } | error::JsonPayloadError::OverflowKnownLength { .. } => {
            ApiError::Validation("Request body is too large".to_string())
        }
        other => ApiError::Internal(other.to_string()),
    }
    .into()
}
