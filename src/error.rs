//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Raised while building resources, before any request is served.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{resource} needs to define attribute: \"{attribute}\"")]
    MissingAttribute {
        resource: String,
        attribute: &'static str,
    },
    #[error("Invalid method \"{method}\", must be one of: {available}.")]
    InvalidMethod { method: String, available: String },
    #[error("{resource} lists method \"{method}\" more than once")]
    DuplicateMethod { resource: String, method: String },
    #[error("missing reference: {kind} id '{id}'")]
    MissingReference { kind: &'static str, id: String },
    #[error("duplicate resource: {0}")]
    DuplicateResource(String),
    #[error("config load: {0}")]
    Load(String),
    #[error("validation: {0}")]
    Validation(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Failure reported by a model backend.
    #[error("model: {0}")]
    Model(String),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AppError {
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            AppError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::Model(_) => (StatusCode::INTERNAL_SERVER_ERROR, "model_error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
                details: None,
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_attribute_names_resource_and_attribute() {
        let err = ConfigError::MissingAttribute {
            resource: "PuppyResource".into(),
            attribute: "model",
        };
        assert_eq!(err.to_string(), "PuppyResource needs to define attribute: \"model\"");
    }

    #[test]
    fn app_error_maps_to_status() {
        assert_eq!(AppError::NotFound("x".into()).status_and_code().0, StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Validation("x".into()).status_and_code(),
            (StatusCode::UNPROCESSABLE_ENTITY, "validation_error")
        );
        let resp = AppError::BadRequest("body".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
