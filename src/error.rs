use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::badge::BadgeError;
use crate::registry::RegistryError;
use crate::validation::ValidationError;

#[derive(Debug)]
pub enum ApiError {
    Unauthorized(String),
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg).into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(value: ValidationError) -> Self {
        ApiError::BadRequest(value.to_string())
    }
}

impl From<RegistryError> for ApiError {
    fn from(value: RegistryError) -> Self {
        match value {
            RegistryError::UnknownClass(_) => ApiError::NotFound(value.to_string()),
        }
    }
}

impl From<BadgeError> for ApiError {
    fn from(value: BadgeError) -> Self {
        error!("badge rendering error: {value}");
        ApiError::Internal("Failed to render membership badge".into())
    }
}
