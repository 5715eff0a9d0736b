//! Request handlers.

pub mod auth;
pub mod info;
pub mod lists;
pub mod todos;
