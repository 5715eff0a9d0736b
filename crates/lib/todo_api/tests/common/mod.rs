//! Shared helpers: an in-memory app with the demo users seeded, plus request
//! and cookie plumbing.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use serde_json::Value;
use todo_api::{AppState, config::ApiConfig};
use todo_core::auth::SessionSecrets;
use tower::ServiceExt;

pub const JOHN: (&str, &str) = ("john@example.com", "password123");
pub const JANE: (&str, &str) = ("jane@example.com", "password456");

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

impl TestResponse {
    /// Full `Set-Cookie` line for `name`, if the response set it.
    pub fn set_cookie(&self, name: &str) -> Option<String> {
        self.headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|line| line.starts_with(&format!("{name}=")))
            .map(str::to_string)
    }

    /// Value of the cookie `name` set by this response.
    pub fn cookie_value(&self, name: &str) -> Option<String> {
        self.set_cookie(name).map(|line| {
            let pair = line.split(';').next().unwrap_or_default();
            pair.split_once('=').map(|(_, v)| v.to_string()).unwrap_or_default()
        })
    }
}

pub fn secrets() -> SessionSecrets {
    SessionSecrets::new("test-access-secret", "test-refresh-secret").unwrap()
}

pub async fn spawn_app() -> TestApp {
    let pool = todo_core::db::connect_in_memory()
        .await
        .expect("in-memory database");
    todo_core::seed::seed_demo_users(&pool)
        .await
        .expect("seed demo users");

    let state = AppState {
        pool,
        config: ApiConfig {
            bind_addr: "127.0.0.1:0".into(),
            database_url: "sqlite::memory:".into(),
            secrets: secrets(),
            secure_cookies: false,
        },
    };
    TestApp {
        router: todo_api::router(state.clone()),
        state,
    }
}

impl TestApp {
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        let req = match body {
            Some(json) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        let resp = self.router.clone().oneshot(req).await.expect("response");
        let status = resp.status();
        let headers = resp.headers().clone();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        TestResponse {
            status,
            headers,
            json,
        }
    }

    pub async fn login(&self, (email, password): (&str, &str)) -> TestResponse {
        self.send(
            Method::POST,
            "/auth/login",
            None,
            Some(serde_json::json!({"email": email, "password": password})),
        )
        .await
    }

    /// Logs in and returns a `Cookie` header value carrying the access token.
    pub async fn access_cookie_for(&self, creds: (&str, &str)) -> String {
        let resp = self.login(creds).await;
        assert_eq!(resp.status, StatusCode::OK, "login failed: {}", resp.json);
        format!(
            "accessToken={}",
            resp.cookie_value("accessToken").expect("access cookie")
        )
    }
}
