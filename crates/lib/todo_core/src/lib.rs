//! # todo_core
//!
//! Core domain logic for the to-do list API: password hashing, session
//! tokens, and the storage queries behind users, lists and todos.

pub mod auth;
pub mod db;
pub mod lists;
pub mod migrate;
pub mod models;
pub mod seed;
pub mod todos;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
