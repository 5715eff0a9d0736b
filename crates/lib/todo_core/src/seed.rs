//! Demo account seeding.

use sqlx::SqlitePool;
use tracing::info;

use crate::auth::AuthError;
use crate::auth::password::hash_password_blocking;
use crate::auth::queries::{create_user, email_exists};
use crate::models::auth::User;

/// A demo account with its plaintext password.
#[derive(Debug, Clone, Copy)]
pub struct DemoUser {
    pub name: &'static str,
    pub username: &'static str,
    pub email: &'static str,
    pub password: &'static str,
}

/// Accounts inserted by [`seed_demo_users`].
pub const DEMO_USERS: [DemoUser; 2] = [
    DemoUser {
        name: "John Smith",
        username: "john",
        email: "john@example.com",
        password: "password123",
    },
    DemoUser {
        name: "Jane Doe",
        username: "jane",
        email: "jane@example.com",
        password: "password456",
    },
];

/// Insert the demo accounts, skipping any whose email already exists.
///
/// Returns the users that were created by this call.
pub async fn seed_demo_users(pool: &SqlitePool) -> Result<Vec<User>, AuthError> {
    let mut created = Vec::new();
    for demo in DEMO_USERS {
        if email_exists(pool, demo.email).await? {
            info!(username = demo.username, "demo user already present");
            continue;
        }
        let hash = hash_password_blocking(demo.password.to_string()).await?;
        let user = create_user(pool, demo.name, demo.username, demo.email, &hash).await?;
        info!(user_id = user.id, username = demo.username, "seeded demo user");
        created.push(user);
    }
    Ok(created)
}
