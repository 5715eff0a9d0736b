//! Application error types.
//!
//! Every failure a handler can produce is an [`AppError`] variant; the HTTP
//! status and body are chosen once, in [`IntoResponse`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todo_core::auth::{AuthError, TokenError};
use tracing::error;

use crate::models::{ErrorResponse, FieldError};

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error")]
    Validation(Vec<FieldError>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("No refresh token")]
    NoRefreshToken,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden")]
    Forbidden,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotAuthenticated
            | AppError::InvalidCredentials
            | AppError::InvalidToken
            | AppError::TokenExpired
            | AppError::NoRefreshToken
            | AppError::InvalidRefreshToken => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Validation(details) => ErrorResponse {
                error: "Validation error".into(),
                message: None,
                details: Some(details),
            },
            AppError::BadRequest(m) | AppError::NotFound(m) | AppError::Conflict(m) => {
                ErrorResponse {
                    error: m,
                    message: None,
                    details: None,
                }
            }
            AppError::Internal(detail) => {
                error!(%detail, "request failed with internal error");
                ErrorResponse {
                    error: "Internal server error".into(),
                    message: Some("An unexpected error occurred".into()),
                    details: None,
                }
            }
            other => ErrorResponse {
                error: other.to_string(),
                message: None,
                details: None,
            },
        };
        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::CredentialError => AppError::InvalidCredentials,
            AuthError::TokenError(TokenError::Internal(msg)) => AppError::Internal(msg),
            AuthError::TokenError(TokenError::Expired) => AppError::TokenExpired,
            AuthError::TokenError(_) => AppError::InvalidToken,
            AuthError::Conflict(msg) => AppError::Conflict(msg),
            AuthError::DbError(e) => AppError::from(e),
            AuthError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<TokenError> for AppError {
    fn from(e: TokenError) -> Self {
        AppError::from(AuthError::TokenError(e))
    }
}
