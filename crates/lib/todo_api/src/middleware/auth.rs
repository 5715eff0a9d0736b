//! Authentication middleware: access cookie extraction and JWT verification.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use todo_core::auth::TokenError;
use todo_core::auth::jwt::verify_token;
use todo_core::models::auth::SessionClaims;
use tracing::debug;

use crate::AppState;
use crate::error::AppError;
use crate::services::cookies::ACCESS_COOKIE;

/// Key used to store the verified `SessionClaims` in request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub SessionClaims);

impl AuthenticatedUser {
    /// Returns the authenticated user ID.
    pub fn user_id(&self) -> i64 {
        self.0.user_id()
    }
}

/// Axum middleware: reads the `accessToken` cookie, verifies it against the
/// access secret, and injects `AuthenticatedUser` into request extensions.
///
/// Expired tokens are rejected with `TokenExpired`; refreshing is the
/// client's job.
pub async fn require_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = jar
        .get(ACCESS_COOKIE)
        .map(|c| c.value())
        .filter(|v| !v.is_empty())
        .ok_or(AppError::NotAuthenticated)?;

    let claims = verify_token(token, state.config.secrets.access()).map_err(|e| {
        debug!(error = %e, "access token rejected");
        match e {
            TokenError::Expired => AppError::TokenExpired,
            TokenError::Malformed | TokenError::InvalidSignature => AppError::InvalidToken,
            TokenError::Internal(msg) => AppError::Internal(msg),
        }
    })?;

    request.extensions_mut().insert(AuthenticatedUser(claims));

    Ok(next.run(request).await)
}
