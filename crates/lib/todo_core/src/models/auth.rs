//! Authentication domain models.
//!
//! These are internal domain models. The HTTP layer projects them into its
//! own response types so the password hash never crosses the API boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public user projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub name: String,
}

/// User with password hash (for internal auth flows).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserWithPassword {
    #[sqlx(flatten)]
    pub user: User,
    pub password_hash: String,
    pub registered: DateTime<Utc>,
}

/// Minimal user-identifying payload embedded in both session tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityClaim {
    pub user_id: i64,
    pub email: String,
    pub username: String,
}

impl From<&User> for IdentityClaim {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            username: user.username.clone(),
        }
    }
}

/// JWT claims carried by access and refresh tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Identity, serialized inline as `userId`, `email`, `username`.
    #[serde(flatten)]
    pub identity: IdentityClaim,
    /// Issued at (unix timestamp).
    pub iat: i64,
    /// Expiry (unix timestamp).
    pub exp: i64,
}

impl SessionClaims {
    /// Returns the authenticated user ID.
    pub fn user_id(&self) -> i64 {
        self.identity.user_id
    }
}
