use axum::{response::{IntoResponse, Response}, http::StatusCode, Json};
use serde::Serialize;

/// Message returned for every unexpected fault. Nothing about the request
/// or the underlying failure is included.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred. Please try again or call us directly.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HandlerErrorKind {
    NotFound,
    Validation,
    Internal,
}

impl std::fmt::Display for HandlerErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HandlerErrorKind::NotFound => "NotFound",
            HandlerErrorKind::Validation => "Validation",
            HandlerErrorKind::Internal => "Internal",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug)]
pub struct HandlerError {
    pub error: HandlerErrorKind,
    pub message: String,
}

impl HandlerError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        HandlerError { error: HandlerErrorKind::Validation, message: msg.into() }
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        HandlerError { error: HandlerErrorKind::NotFound, message: msg.into() }
    }

    /// Opaque server fault; the real cause should already be logged.
    pub fn internal() -> Self {
        HandlerError { error: HandlerErrorKind::Internal, message: GENERIC_FAILURE_MESSAGE.to_string() }
    }

    pub fn status(&self) -> StatusCode {
        match self.error {
            HandlerErrorKind::NotFound => StatusCode::NOT_FOUND,
            HandlerErrorKind::Validation => StatusCode::BAD_REQUEST,
            HandlerErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for HandlerError {}

/// `{ "success": false, "error": "..." }`
#[derive(Debug, Serialize)]
struct FailureBody {
    success: bool,
    error: String,
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(FailureBody { success: false, error: self.message });
        (status, body).into_response()
    }
}

impl From<ServiceError> for HandlerError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(msg) => HandlerError::validation(msg),
            ServiceError::NotFound(msg) => HandlerError::not_found(msg),
            ServiceError::InternalError(msg) => {
                tracing::error!("Internal service error: {}", msg);
                HandlerError::internal()
            }
        }
    }
}


#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceError {
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Invalid Input: {0}")]
    InvalidInput(String),
    #[error("Internal Error: {0}")]
    InternalError(String),
}

// Allow conversion from RepositoryError to ServiceError
impl From<crate::repository::repository_error::RepositoryError> for ServiceError {
    fn from(err: crate::repository::repository_error::RepositoryError) -> Self {
        use crate::repository::repository_error::RepositoryError;
        match err {
            RepositoryError::NotFound(msg) => ServiceError::NotFound(msg),
            other => ServiceError::InternalError(other.to_string()),
        }
    }
}
