//! Cookie-based session middleware.
//!
//! Every page request is bound to a session before its handler runs. The
//! session ID travels in the `contacts.sid` cookie, which is re-issued on
//! every response so its lifetime follows the server-side idle TTL.

use super::AppState;
use crate::session::{SessionHandle, SessionId};
use axum::extract::{Request, State};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use std::time::Duration;
use tracing::error;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "contacts.sid";

/// The session bound to the current request, available to handlers as an
/// `Extension`.
#[derive(Clone)]
pub struct CurrentSession {
    pub id: SessionId,
    pub handle: SessionHandle,
}

/// Resume or start the caller's session and attach it to the request.
pub async fn attach_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let requested = session_id_from_headers(request.headers());
    let (id, handle, _created) = state.sessions.load_or_create(requested);
    request
        .extensions_mut()
        .insert(CurrentSession { id, handle });

    let mut response = next.run(request).await;

    let cookie = session_cookie(id, state.sessions.ttl());
    match HeaderValue::from_str(&cookie) {
        Ok(value) => {
            response.headers_mut().append(SET_COOKIE, value);
        }
        Err(e) => error!(error = %e, "Failed to encode session cookie"),
    }
    response
}

/// Find a well-formed session ID among the request's cookies.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| value.trim().parse().ok())
}

fn session_cookie(id: SessionId, ttl: Duration) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE,
        id,
        ttl.as_secs()
    )
}
