//! Ownership authorization for lists and todos.
//!
//! A list owned by someone else is reported as missing. A todo is looked up
//! first and only then checked against its parent list, so a foreign todo is
//! reported as forbidden rather than missing; clients rely on that difference.

use sqlx::SqlitePool;
use todo_core::lists::{self, ListRow};
use todo_core::todos::{self, TodoRow};
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Resolve a list the user owns, or `NotFound`.
pub async fn owned_list(pool: &SqlitePool, user_id: i64, list_id: i64) -> AppResult<ListRow> {
    lists::get_list(pool, user_id, list_id)
        .await?
        .ok_or_else(|| AppError::NotFound("List not found".into()))
}

/// Resolve a todo whose parent list the user owns.
///
/// Missing todo → `NotFound`; todo under another user's list → `Forbidden`.
pub async fn accessible_todo(pool: &SqlitePool, user_id: i64, todo_id: i64) -> AppResult<TodoRow> {
    let todo = todos::get_todo(pool, todo_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Todo not found".into()))?;

    if lists::get_list(pool, user_id, todo.list_id).await?.is_none() {
        debug!(user_id, todo_id, "todo belongs to another user's list");
        return Err(AppError::Forbidden);
    }
    Ok(todo)
}
