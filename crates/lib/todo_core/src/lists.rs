//! List persistence.
//!
//! Every read and write is scoped by owner: a list owned by someone else
//! behaves exactly like a missing one.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

/// Row returned by list queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ListRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}

/// List all lists owned by a user, oldest first.
pub async fn list_lists(pool: &SqlitePool, user_id: i64) -> Result<Vec<ListRow>, sqlx::Error> {
    sqlx::query_as::<_, ListRow>(
        r#"
        SELECT id, title, description, created_by, created_at
        FROM lists
        WHERE created_by = $1
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Get a list by ID (scoped to owner).
pub async fn get_list(
    pool: &SqlitePool,
    user_id: i64,
    list_id: i64,
) -> Result<Option<ListRow>, sqlx::Error> {
    sqlx::query_as::<_, ListRow>(
        r#"
        SELECT id, title, description, created_by, created_at
        FROM lists
        WHERE id = $1 AND created_by = $2
        "#,
    )
    .bind(list_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Create a new list owned by `user_id`.
pub async fn create_list(
    pool: &SqlitePool,
    user_id: i64,
    title: &str,
    description: Option<&str>,
) -> Result<ListRow, sqlx::Error> {
    sqlx::query_as::<_, ListRow>(
        r#"
        INSERT INTO lists (title, description, created_by)
        VALUES ($1, $2, $3)
        RETURNING id, title, description, created_by, created_at
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// Update a list's title and/or description. `None` keeps the stored value.
pub async fn update_list(
    pool: &SqlitePool,
    user_id: i64,
    list_id: i64,
    title: Option<&str>,
    description: Option<&str>,
) -> Result<Option<ListRow>, sqlx::Error> {
    sqlx::query_as::<_, ListRow>(
        r#"
        UPDATE lists
        SET title = COALESCE($1, title), description = COALESCE($2, description)
        WHERE id = $3 AND created_by = $4
        RETURNING id, title, description, created_by, created_at
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(list_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Delete a list and, through the foreign key cascade, its todos.
///
/// Returns `false` when no list with that ID belongs to the user.
pub async fn delete_list(
    pool: &SqlitePool,
    user_id: i64,
    list_id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM lists WHERE id = $1 AND created_by = $2")
        .bind(list_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
