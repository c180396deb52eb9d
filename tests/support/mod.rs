//! Shared helpers for driving the router in tests.

use axum::body::{self, Body};
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use contacts_manager::{build_router, AppState, SeedData, SessionStore};
use std::time::Duration;
use tower::ServiceExt;

pub fn test_app() -> Router {
    test_app_with_ttl(Duration::from_secs(60))
}

pub fn test_app_with_ttl(ttl: Duration) -> Router {
    let sessions = SessionStore::new(SeedData::sample().expect("seed"), ttl);
    build_router(
        AppState::new(sessions),
        concat!(env!("CARGO_MANIFEST_DIR"), "/public"),
    )
}

pub async fn get(app: &Router, path: &str, cookie: Option<&str>) -> Response {
    let mut request = Request::get(path);
    if let Some(cookie) = cookie {
        request = request.header(COOKIE, cookie);
    }
    app.clone()
        .oneshot(request.body(Body::empty()).expect("request"))
        .await
        .expect("response")
}

pub async fn post_form(app: &Router, path: &str, cookie: Option<&str>, body: &str) -> Response {
    let mut request = Request::post(path).header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        request = request.header(COOKIE, cookie);
    }
    app.clone()
        .oneshot(request.body(Body::from(body.to_string())).expect("request"))
        .await
        .expect("response")
}

/// The `name=value` part of the session cookie set on `response`.
pub fn session_cookie(response: &Response) -> String {
    response
        .headers()
        .get(SET_COOKIE)
        .expect("session cookie")
        .to_str()
        .expect("ascii cookie")
        .split(';')
        .next()
        .expect("cookie pair")
        .to_string()
}

/// Start a session by loading the list page and return its cookie.
pub async fn start_session(app: &Router) -> String {
    let response = get(app, "/contacts", None).await;
    session_cookie(&response)
}

pub async fn body_text(response: Response) -> String {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}
