//! Credential store queries.

use sqlx::SqlitePool;

use super::AuthError;
use crate::models::auth::{User, UserWithPassword};

/// Fetch a user and their password hash by email.
pub async fn find_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<UserWithPassword>, AuthError> {
    let row = sqlx::query_as::<_, UserWithPassword>(
        "SELECT id, email, username, name, password_hash, registered FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Fetch the public projection of a user by ID.
pub async fn get_user_by_id(pool: &SqlitePool, user_id: i64) -> Result<Option<User>, AuthError> {
    let row = sqlx::query_as::<_, User>(
        "SELECT id, email, username, name FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Check whether an email is already registered.
pub async fn email_exists(pool: &SqlitePool, email: &str) -> Result<bool, AuthError> {
    let exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(pool)
            .await?;
    Ok(exists)
}

/// Check whether a username is already taken.
pub async fn username_exists(pool: &SqlitePool, username: &str) -> Result<bool, AuthError> {
    let exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
            .bind(username)
            .fetch_one(pool)
            .await?;
    Ok(exists)
}

/// Create a new user from an already-hashed password.
pub async fn create_user(
    pool: &SqlitePool,
    name: &str,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, AuthError> {
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (name, username, email, password_hash) VALUES ($1, $2, $3, $4) \
         RETURNING id, email, username, name",
    )
    .bind(name)
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;
    Ok(user)
}

/// Delete a user. Fails with a foreign key violation while the user still owns lists.
pub async fn delete_user(pool: &SqlitePool, user_id: i64) -> Result<bool, AuthError> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
