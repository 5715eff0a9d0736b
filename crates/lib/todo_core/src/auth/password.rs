//! Password hashing via bcrypt.
//!
//! The async variants move the work onto tokio's blocking pool so a login
//! never stalls a runtime worker thread.

use std::sync::LazyLock;

use super::AuthError;

/// bcrypt cost factor.
const BCRYPT_COST: u32 = 10;

/// Hash compared against when the looked-up account does not exist, so an
/// unknown email costs the same as a wrong password.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| bcrypt::hash("not-a-real-password", BCRYPT_COST).ok());

/// Builds the dummy hash up front so the first unknown-email login is not
/// slower than later ones.
pub fn warm_up() {
    LazyLock::force(&DUMMY_HASH);
}

/// Hash a password with bcrypt (cost 10).
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    bcrypt::hash(password, BCRYPT_COST)
        .map_err(|e| AuthError::Internal(format!("bcrypt hash: {e}")))
}

/// Verify a password against a bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    bcrypt::verify(password, hash).map_err(|e| AuthError::Internal(format!("bcrypt verify: {e}")))
}

/// Hash a password on the blocking thread pool.
pub async fn hash_password_blocking(password: String) -> Result<String, AuthError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AuthError::Internal(format!("hash task: {e}")))?
}

/// Verify a password on the blocking thread pool.
///
/// With `hash == None` the password is checked against a dummy hash and the
/// result is always `false`.
pub async fn verify_password_blocking(
    password: String,
    hash: Option<String>,
) -> Result<bool, AuthError> {
    tokio::task::spawn_blocking(move || match hash {
        Some(hash) => verify_password(&password, &hash),
        None => {
            if let Some(dummy) = DUMMY_HASH.as_deref() {
                let _ = bcrypt::verify(&password, dummy);
            }
            Ok(false)
        }
    })
    .await
    .map_err(|e| AuthError::Internal(format!("verify task: {e}")))?
}
