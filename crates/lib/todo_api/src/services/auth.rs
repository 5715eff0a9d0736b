//! Authentication service: login, registration and session minting.

use sqlx::SqlitePool;
use todo_core::auth::jwt::{issue_access_token, issue_refresh_token, verify_token};
use todo_core::auth::password::{hash_password_blocking, verify_password_blocking};
use todo_core::auth::queries;
use todo_core::auth::{AuthError, SessionSecrets};
use todo_core::models::auth::{IdentityClaim, User};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

/// A freshly minted access/refresh token pair.
#[derive(Debug, Clone)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Sign both tokens over the same identity.
pub fn issue_session(identity: &IdentityClaim, secrets: &SessionSecrets) -> AppResult<SessionTokens> {
    Ok(SessionTokens {
        access_token: issue_access_token(identity, secrets)?,
        refresh_token: issue_refresh_token(identity, secrets)?,
    })
}

/// Authenticate with email + password.
///
/// An unknown email and a wrong password produce the same error.
pub async fn login(
    pool: &SqlitePool,
    email: &str,
    password: &str,
    secrets: &SessionSecrets,
) -> AppResult<(User, SessionTokens)> {
    let row = queries::find_user_by_email(pool, email).await?;
    let stored_hash = row.as_ref().map(|r| r.password_hash.clone());

    let valid = verify_password_blocking(password.to_string(), stored_hash).await?;
    let user = match row {
        Some(r) if valid => r.user,
        _ => {
            debug!("login rejected");
            return Err(AuthError::CredentialError.into());
        }
    };

    let tokens = issue_session(&IdentityClaim::from(&user), secrets)?;
    info!(user_id = user.id, "user logged in");
    Ok((user, tokens))
}

/// Exchange a refresh token for a new pair carrying the same identity.
///
/// Every verification failure collapses to [`AppError::InvalidRefreshToken`].
pub fn refresh(refresh_token: &str, secrets: &SessionSecrets) -> AppResult<SessionTokens> {
    let claims = verify_token(refresh_token, secrets.refresh()).map_err(|e| {
        debug!(error = %e, "refresh token rejected");
        AppError::InvalidRefreshToken
    })?;
    issue_session(&claims.identity, secrets)
}

/// Register a new user account.
pub async fn register(
    pool: &SqlitePool,
    name: &str,
    username: &str,
    email: &str,
    password: &str,
) -> AppResult<User> {
    if queries::email_exists(pool, email).await? {
        return Err(AuthError::Conflict("Email already registered".into()).into());
    }
    if queries::username_exists(pool, username).await? {
        return Err(AuthError::Conflict("Username already taken".into()).into());
    }

    let pw_hash = hash_password_blocking(password.to_string()).await?;
    let user = queries::create_user(pool, name, username, email, &pw_hash).await?;
    info!(user_id = user.id, "user registered");
    Ok(user)
}

/// Load the live profile for an authenticated user.
pub async fn current_user(pool: &SqlitePool, user_id: i64) -> AppResult<User> {
    queries::get_user_by_id(pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))
}
