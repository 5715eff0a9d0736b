//! Authentication and authorization logic.
//!
//! Provides password hashing, session token management, and the credential
//! store queries used by the HTTP layer.

pub mod jwt;
pub mod password;
pub mod queries;

use thiserror::Error;

pub use jwt::{SessionSecrets, TokenError};

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    CredentialError,

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    DbError(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
