//! Session token issuance and verification.
//!
//! Two HS256 JWTs carry the same [`IdentityClaim`]: a short-lived access token
//! and a long-lived refresh token, each signed with its own secret. Nothing is
//! persisted; a token is valid exactly while its signature checks out and its
//! expiry has not passed.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use crate::models::auth::{IdentityClaim, SessionClaims};

/// Access token lifetime: 15 minutes.
pub const ACCESS_TOKEN_TTL: Duration = Duration::minutes(15);

/// Refresh token lifetime: 7 days.
pub const REFRESH_TOKEN_TTL: Duration = Duration::days(7);

/// Environment variable holding the access token secret.
pub const ACCESS_SECRET_VAR: &str = "JWT_ACCESS_SECRET";

/// Environment variable holding the refresh token secret.
pub const REFRESH_SECRET_VAR: &str = "JWT_REFRESH_SECRET";

/// Token verification and signing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token has expired")]
    Expired,

    #[error("token processing failed: {0}")]
    Internal(String),
}

/// Signing secrets for both token kinds.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Clone)]
pub struct SessionSecrets {
    access: String,
    refresh: String,
}

impl fmt::Debug for SessionSecrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionSecrets")
            .field("access", &"<redacted>")
            .field("refresh", &"<redacted>")
            .finish()
    }
}

/// A required secret was absent or empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0} must be set to a non-empty value")]
pub struct MissingSecret(pub &'static str);

impl SessionSecrets {
    /// Builds the secret pair, rejecting empty values.
    pub fn new(
        access: impl Into<String>,
        refresh: impl Into<String>,
    ) -> Result<Self, MissingSecret> {
        let access = access.into();
        let refresh = refresh.into();
        if access.is_empty() {
            return Err(MissingSecret(ACCESS_SECRET_VAR));
        }
        if refresh.is_empty() {
            return Err(MissingSecret(REFRESH_SECRET_VAR));
        }
        Ok(Self { access, refresh })
    }

    pub fn access(&self) -> &[u8] {
        self.access.as_bytes()
    }

    pub fn refresh(&self) -> &[u8] {
        self.refresh.as_bytes()
    }
}

/// Sign `identity` with an explicit issuance time and lifetime.
pub fn issue_token_at(
    identity: &IdentityClaim,
    secret: &[u8],
    issued_at: DateTime<Utc>,
    ttl: Duration,
) -> Result<String, TokenError> {
    let claims = SessionClaims {
        identity: identity.clone(),
        iat: issued_at.timestamp(),
        exp: (issued_at + ttl).timestamp(),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| TokenError::Internal(format!("jwt encode: {e}")))
}

/// Generate a signed access token (HS256, 15 min expiry).
pub fn issue_access_token(
    identity: &IdentityClaim,
    secrets: &SessionSecrets,
) -> Result<String, TokenError> {
    issue_token_at(identity, secrets.access(), Utc::now(), ACCESS_TOKEN_TTL)
}

/// Generate a signed refresh token (HS256, 7 day expiry).
pub fn issue_refresh_token(
    identity: &IdentityClaim,
    secrets: &SessionSecrets,
) -> Result<String, TokenError> {
    issue_token_at(identity, secrets.refresh(), Utc::now(), REFRESH_TOKEN_TTL)
}

/// Verify a token against `secret`, returning its claims on success.
///
/// The signature is checked before the expiry, and expiry has no leeway.
pub fn verify_token(token: &str, secret: &[u8]) -> Result<SessionClaims, TokenError> {
    let key = DecodingKey::from_secret(secret);
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;
    decode::<SessionClaims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            ErrorKind::InvalidKeyFormat | ErrorKind::Crypto(_) => {
                TokenError::Internal(format!("jwt decode: {e}"))
            }
            _ => TokenError::Malformed,
        })
}
