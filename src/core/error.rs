use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ApiResponse;

/// Externally visible failure categories.
///
/// Every [`AppError`] collapses into exactly one of these before it leaves
/// the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// The caller sent something unusable (empty field, malformed identifier)
    InvalidArgument,
    NotFound,
    Internal,
}

impl StatusKind {
    pub fn http_status(self) -> StatusCode {
        match self {
            StatusKind::InvalidArgument => StatusCode::BAD_REQUEST,
            StatusKind::NotFound => StatusCode::NOT_FOUND,
            StatusKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A write completed without affecting any row
    #[error("Not created: {0}")]
    NotCreated(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_kind(&self) -> StatusKind {
        match self {
            AppError::Validation(_) | AppError::InvalidIdentifier(_) | AppError::BadRequest(_) => {
                StatusKind::InvalidArgument
            }
            AppError::NotFound(_) => StatusKind::NotFound,
            AppError::NotCreated(_) | AppError::Database(_) | AppError::Internal(_) => {
                StatusKind::Internal
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_kind().http_status();

        let (message, errors) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                ("Internal server error".to_string(), None)
            }
            AppError::NotCreated(ref msg) => {
                tracing::error!("Write affected no rows: {}", msg);
                ("Internal server error".to_string(), None)
            }
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                ("Internal server error".to_string(), None)
            }
            AppError::Validation(ref msg) => (msg.clone(), Some(vec![msg.clone()])),
            AppError::InvalidIdentifier(ref msg)
            | AppError::BadRequest(ref msg)
            | AppError::NotFound(ref msg) => (msg.clone(), None),
        };

        let body = Json(ApiResponse::<()>::error(Some(message), errors));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
