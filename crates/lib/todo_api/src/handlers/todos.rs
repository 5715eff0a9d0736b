//! Todo request handlers. All routes are behind `require_auth`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use todo_core::todos;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedJson, parse_id};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{CreateTodoRequest, MessageResponse, TodoRow, UpdateTodoRequest};
use crate::services::ownership::{accessible_todo, owned_list};

fn todo_not_found() -> AppError {
    AppError::NotFound("Todo not found".into())
}

/// `GET /lists/{list_id}/todos`: todos of an owned list.
pub async fn list_todos_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(list_id): Path<String>,
) -> AppResult<Json<Vec<TodoRow>>> {
    let list_id = parse_id(&list_id, "list")?;
    let list = owned_list(&state.pool, user.user_id(), list_id).await?;
    let rows = todos::list_todos(&state.pool, list.id).await?;
    Ok(Json(rows))
}

/// `GET /todos/{id}`: a single todo under one of the caller's lists.
pub async fn get_todo_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> AppResult<Json<TodoRow>> {
    let todo_id = parse_id(&id, "todo")?;
    let todo = accessible_todo(&state.pool, user.user_id(), todo_id).await?;
    Ok(Json(todo))
}

/// `POST /lists/{list_id}/todos`: add a todo to an owned list.
pub async fn create_todo_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(list_id): Path<String>,
    body: Result<ValidatedJson<CreateTodoRequest>, AppError>,
) -> AppResult<(StatusCode, Json<TodoRow>)> {
    let list_id = parse_id(&list_id, "list")?;
    let ValidatedJson(body) = body?;
    let list = owned_list(&state.pool, user.user_id(), list_id).await?;
    let todo = todos::create_todo(&state.pool, list.id, &body.title).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// `PUT /todos/{id}`: update title and/or done flag.
pub async fn update_todo_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    body: Result<ValidatedJson<UpdateTodoRequest>, AppError>,
) -> AppResult<Json<TodoRow>> {
    let todo_id = parse_id(&id, "todo")?;
    let ValidatedJson(body) = body?;
    let todo = accessible_todo(&state.pool, user.user_id(), todo_id).await?;
    let updated = todos::update_todo(&state.pool, todo.id, body.title.as_deref(), body.done)
        .await?
        .ok_or_else(todo_not_found)?;
    Ok(Json(updated))
}

/// `DELETE /todos/{id}`: remove a todo.
pub async fn delete_todo_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let todo_id = parse_id(&id, "todo")?;
    let todo = accessible_todo(&state.pool, user.user_id(), todo_id).await?;
    if !todos::delete_todo(&state.pool, todo.id).await? {
        return Err(todo_not_found());
    }
    Ok(Json(MessageResponse::new("Todo deleted successfully")))
}
