//! Root endpoint: service name and version.

use axum::Json;

use crate::models::ApiInfoResponse;

/// `GET /`: identifies the API.
pub async fn api_info() -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        message: "To-do List API".into(),
        version: todo_core::version().into(),
    })
}
