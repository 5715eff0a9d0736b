//! Todo persistence.
//!
//! Todo rows are looked up by ID alone; ownership is decided by the caller
//! through the parent list.

use serde::Serialize;
use sqlx::SqlitePool;

/// Row returned by todo queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TodoRow {
    pub id: i64,
    pub list_id: i64,
    pub title: String,
    pub done: bool,
}

/// List the todos of a list, in creation order.
pub async fn list_todos(pool: &SqlitePool, list_id: i64) -> Result<Vec<TodoRow>, sqlx::Error> {
    sqlx::query_as::<_, TodoRow>(
        "SELECT id, list_id, title, done FROM todos WHERE list_id = $1 ORDER BY id",
    )
    .bind(list_id)
    .fetch_all(pool)
    .await
}

/// Get a todo by ID.
pub async fn get_todo(pool: &SqlitePool, todo_id: i64) -> Result<Option<TodoRow>, sqlx::Error> {
    sqlx::query_as::<_, TodoRow>("SELECT id, list_id, title, done FROM todos WHERE id = $1")
        .bind(todo_id)
        .fetch_optional(pool)
        .await
}

/// Create a todo in `list_id`. New todos start not done.
pub async fn create_todo(
    pool: &SqlitePool,
    list_id: i64,
    title: &str,
) -> Result<TodoRow, sqlx::Error> {
    sqlx::query_as::<_, TodoRow>(
        "INSERT INTO todos (list_id, title) VALUES ($1, $2) RETURNING id, list_id, title, done",
    )
    .bind(list_id)
    .bind(title)
    .fetch_one(pool)
    .await
}

/// Update a todo's title and/or done flag. `None` keeps the stored value.
pub async fn update_todo(
    pool: &SqlitePool,
    todo_id: i64,
    title: Option<&str>,
    done: Option<bool>,
) -> Result<Option<TodoRow>, sqlx::Error> {
    sqlx::query_as::<_, TodoRow>(
        r#"
        UPDATE todos
        SET title = COALESCE($1, title), done = COALESCE($2, done)
        WHERE id = $3
        RETURNING id, list_id, title, done
        "#,
    )
    .bind(title)
    .bind(done)
    .bind(todo_id)
    .fetch_optional(pool)
    .await
}

/// Delete a todo. Returns `false` if it did not exist.
pub async fn delete_todo(pool: &SqlitePool, todo_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM todos WHERE id = $1")
        .bind(todo_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
