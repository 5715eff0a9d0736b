//! List request handlers. All routes are behind `require_auth`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use todo_core::lists;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedJson, parse_id};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{CreateListRequest, ListRow, MessageResponse, UpdateListRequest};
use crate::services::ownership::owned_list;

fn list_not_found() -> AppError {
    AppError::NotFound("List not found".into())
}

/// `GET /lists`: lists owned by the caller.
pub async fn list_lists_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Json<Vec<ListRow>>> {
    let rows = lists::list_lists(&state.pool, user.user_id()).await?;
    Ok(Json(rows))
}

/// `GET /lists/{id}`: a single owned list.
pub async fn get_list_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> AppResult<Json<ListRow>> {
    let list_id = parse_id(&id, "list")?;
    let list = owned_list(&state.pool, user.user_id(), list_id).await?;
    Ok(Json(list))
}

/// `POST /lists`: create a list owned by the caller.
pub async fn create_list_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(body): ValidatedJson<CreateListRequest>,
) -> AppResult<(StatusCode, Json<ListRow>)> {
    let list = lists::create_list(
        &state.pool,
        user.user_id(),
        &body.title,
        body.description.as_deref(),
    )
    .await?;
    Ok((StatusCode::CREATED, Json(list)))
}

/// `PUT /lists/{id}`: update title and/or description of an owned list.
pub async fn update_list_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    body: Result<ValidatedJson<UpdateListRequest>, AppError>,
) -> AppResult<Json<ListRow>> {
    let list_id = parse_id(&id, "list")?;
    let ValidatedJson(body) = body?;
    let list = lists::update_list(
        &state.pool,
        user.user_id(),
        list_id,
        body.title.as_deref(),
        body.description.as_deref(),
    )
    .await?
    .ok_or_else(list_not_found)?;
    Ok(Json(list))
}

/// `DELETE /lists/{id}`: delete an owned list and its todos.
pub async fn delete_list_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let list_id = parse_id(&id, "list")?;
    if !lists::delete_list(&state.pool, user.user_id(), list_id).await? {
        return Err(list_not_found());
    }
    Ok(Json(MessageResponse::new("List deleted successfully")))
}
