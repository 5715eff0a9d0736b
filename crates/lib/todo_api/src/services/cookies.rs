//! Cookie service: set/clear the HttpOnly session cookies.
//!
//! The refresh cookie is scoped to the refresh endpoint, so browsers only
//! send it there. Clearing must use the same path or the browser keeps it.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;
use todo_core::auth::jwt::{ACCESS_TOKEN_TTL, REFRESH_TOKEN_TTL};

/// Cookie name for the access token.
pub const ACCESS_COOKIE: &str = "accessToken";
/// Cookie name for the refresh token.
pub const REFRESH_COOKIE: &str = "refreshToken";

/// Path of the access cookie.
pub const ACCESS_COOKIE_PATH: &str = "/";
/// Path of the refresh cookie: only the refresh endpoint ever sees it.
pub const REFRESH_COOKIE_PATH: &str = "/auth/refresh";

fn session_cookie(
    name: &'static str,
    value: String,
    path: &'static str,
    max_age: Duration,
    secure: bool,
) -> Cookie<'static> {
    Cookie::build((name, value))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .path(path)
        .max_age(max_age)
        .build()
}

/// Build the access token cookie (15 minutes).
pub fn access_cookie(token: String, secure: bool) -> Cookie<'static> {
    session_cookie(
        ACCESS_COOKIE,
        token,
        ACCESS_COOKIE_PATH,
        Duration::seconds(ACCESS_TOKEN_TTL.num_seconds()),
        secure,
    )
}

/// Build the refresh token cookie (7 days).
pub fn refresh_cookie(token: String, secure: bool) -> Cookie<'static> {
    session_cookie(
        REFRESH_COOKIE,
        token,
        REFRESH_COOKIE_PATH,
        Duration::seconds(REFRESH_TOKEN_TTL.num_seconds()),
        secure,
    )
}

/// Build an expired access cookie to clear it.
pub fn clear_access_cookie(secure: bool) -> Cookie<'static> {
    session_cookie(
        ACCESS_COOKIE,
        String::new(),
        ACCESS_COOKIE_PATH,
        Duration::ZERO,
        secure,
    )
}

/// Build an expired refresh cookie to clear it.
pub fn clear_refresh_cookie(secure: bool) -> Cookie<'static> {
    session_cookie(
        REFRESH_COOKIE,
        String::new(),
        REFRESH_COOKIE_PATH,
        Duration::ZERO,
        secure,
    )
}
