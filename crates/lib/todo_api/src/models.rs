//! Request and response bodies.
//!
//! Request types carry their validation rules; see [`crate::extract::ValidatedJson`].

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use todo_core::lists::ListRow;
pub use todo_core::models::auth::User;
pub use todo_core::todos::TodoRow;

/// `POST /auth/login` body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,
}

/// `POST /auth/register` body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,
}

/// Body returned by login and registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

/// Plain confirmation body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `GET /` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiInfoResponse {
    pub message: String,
    pub version: String,
}

/// `POST /lists` body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateListRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub description: Option<String>,
}

/// `PUT /lists/{id}` body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateListRequest {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
}

/// `POST /lists/{listId}/todos` body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTodoRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
}

/// `PUT /todos/{id}` body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTodoRequest {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    pub done: Option<bool>,
}

/// One failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Dotted path of the offending field; empty for whole-body errors.
    pub path: String,
    pub message: String,
}

/// Error body shared by every failing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}
