use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::MessageBody;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

pub const DISH_NOT_FOUND: &str = "Dish not found";
pub const DISH_EXISTS: &str = "Dish already exists";
pub const INVALID_ID: &str = "Invalid ID format";

/// Error response carrying `{"message": ...}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn invalid_payload(detail: impl std::fmt::Display) -> Self {
        Self::new(StatusCode::BAD_REQUEST, format!("Invalid dish data: {detail}"))
    }

    /// Map a service failure; `failure` is the operation's message for store errors.
    pub fn from_service(e: ServiceError, failure: &'static str) -> Self {
        match e {
            ServiceError::Validation(msg) => Self::invalid_payload(msg),
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, DISH_NOT_FOUND),
            ServiceError::DuplicateName(_) => Self::new(StatusCode::CONFLICT, DISH_EXISTS),
            ServiceError::InvalidIdentifier(_) => Self::new(StatusCode::BAD_REQUEST, INVALID_ID),
            ServiceError::Store(detail) => {
                error!(error = %detail, failure, "dish store failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, failure)
            }
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(MessageBody::new(self.message))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("store unavailable: {0}")]
    Store(String),
    #[error("seeding failed: {0}")]
    Seed(#[from] ServiceError),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_statuses() {
        let cases = [
            (ServiceError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (ServiceError::not_found("dish"), StatusCode::NOT_FOUND),
            (ServiceError::DuplicateName("Tacos".into()), StatusCode::CONFLICT),
            (ServiceError::InvalidIdentifier("1".into()), StatusCode::BAD_REQUEST),
            (ServiceError::Store("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from_service(err, "Error adding dish").status, status);
        }
    }

    #[test]
    fn store_failure_hides_detail() {
        let e = JsonApiError::from_service(ServiceError::Store("password=secret".into()), "Error fetching dishes");
        assert_eq!(e.message, "Error fetching dishes");
    }
}
