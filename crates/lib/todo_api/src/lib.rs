//! # todo_api
//!
//! HTTP API library for the to-do list service.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use axum::Router;
use axum::routing::{get, post};
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{auth, info, lists, todos};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool.
    pub pool: SqlitePool,
    /// API configuration.
    pub config: ApiConfig,
}

/// Run embedded database migrations.
///
/// Delegates to `todo_core::migrate::migrate()` which owns the migration files.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    todo_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no auth required)
    let public = Router::new()
        .route(routes::GET_ROOT, get(info::api_info))
        .route(routes::POST_AUTH_LOGIN, post(auth::login_handler))
        .route(routes::POST_AUTH_REGISTER, post(auth::register_handler))
        .route(routes::POST_AUTH_REFRESH, post(auth::refresh_handler))
        .route(routes::POST_AUTH_LOGOUT, post(auth::logout_handler));

    // Protected routes (require auth). `route_layer` keeps the gate off the
    // fallback so unknown paths stay 404.
    let protected = Router::new()
        .route(routes::GET_AUTH_ME, get(auth::me_handler))
        .route(
            routes::LISTS,
            get(lists::list_lists_handler).post(lists::create_list_handler),
        )
        .route(
            routes::LISTS_ID,
            get(lists::get_list_handler)
                .put(lists::update_list_handler)
                .delete(lists::delete_list_handler),
        )
        .route(
            routes::LISTS_ID_TODOS,
            get(todos::list_todos_handler).post(todos::create_todo_handler),
        )
        .route(
            routes::TODOS_ID,
            get(todos::get_todo_handler)
                .put(todos::update_todo_handler)
                .delete(todos::delete_todo_handler),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
