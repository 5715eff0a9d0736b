//! Business logic between handlers and `todo_core`.

pub mod auth;
pub mod cookies;
pub mod ownership;
