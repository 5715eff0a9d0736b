//! Authentication request handlers.
//!
//! Session tokens travel only in HttpOnly cookies; response bodies never
//! contain them.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use axum_extra::extract::CookieJar;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{LoginRequest, MessageResponse, RegisterRequest, User, UserResponse};
use crate::services::auth::{self, SessionTokens};
use crate::services::cookies::{
    REFRESH_COOKIE, access_cookie, clear_access_cookie, clear_refresh_cookie, refresh_cookie,
};

fn with_session(jar: CookieJar, tokens: SessionTokens, secure: bool) -> CookieJar {
    jar.add(access_cookie(tokens.access_token, secure))
        .add(refresh_cookie(tokens.refresh_token, secure))
}

/// `POST /auth/login`: authenticate with email + password.
pub async fn login_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> AppResult<(CookieJar, Json<UserResponse>)> {
    let (user, tokens) =
        auth::login(&state.pool, &body.email, &body.password, &state.config.secrets).await?;
    let jar = with_session(jar, tokens, state.config.secure_cookies);
    Ok((jar, Json(UserResponse { user })))
}

/// `POST /auth/register`: create a new user account.
pub async fn register_handler(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = auth::register(
        &state.pool,
        &body.name,
        &body.username,
        &body.email,
        &body.password,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(UserResponse { user })))
}

/// `POST /auth/refresh`: exchange the refresh cookie for a new token pair.
pub async fn refresh_handler(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<MessageResponse>)> {
    let token = jar
        .get(REFRESH_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(AppError::NoRefreshToken)?;

    let tokens = auth::refresh(&token, &state.config.secrets)?;
    let jar = with_session(jar, tokens, state.config.secure_cookies);
    Ok((jar, Json(MessageResponse::new("Tokens refreshed"))))
}

/// `POST /auth/logout`: clear both session cookies. Always succeeds.
pub async fn logout_handler(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let secure = state.config.secure_cookies;
    let jar = jar
        .add(clear_access_cookie(secure))
        .add(clear_refresh_cookie(secure));
    (jar, Json(MessageResponse::new("Logged out successfully")))
}

/// `GET /auth/me`: live profile of the authenticated user.
pub async fn me_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Json<User>> {
    let profile = auth::current_user(&state.pool, user.user_id()).await?;
    Ok(Json(profile))
}
