//! Session cookie middleware.
//!
//! Every request gets a [`SessionId`] in its extensions: the one named by
//! the `sid` cookie when it is well-formed, otherwise a fresh one. The cookie
//! is re-issued on every response so the session expires only after a full
//! idle TTL.

use crate::session::{SessionId, SESSION_COOKIE};
use crate::web::state::AppState;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use std::time::Duration;
use tracing::debug;

pub async fn ensure_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> (CookieJar, Response) {
    let session = match jar.get(SESSION_COOKIE).and_then(|c| SessionId::parse(c.value())) {
        Some(session) => session,
        None => {
            let session = SessionId::generate();
            debug!(session = %session, "New session");
            session
        }
    };

    request.extensions_mut().insert(session.clone());
    let response = next.run(request).await;

    let jar = jar.add(session_cookie(&session, state.flash().ttl()));
    (jar, response)
}

fn session_cookie(session: &SessionId, ttl: Duration) -> Cookie<'static> {
    // Max-Age is whole seconds; round up so short TTLs never become zero.
    let max_age = ttl.as_millis().div_ceil(1000);
    let raw = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE, session, max_age
    );
    Cookie::parse(raw).unwrap_or_else(|_| Cookie::new(SESSION_COOKIE, session.to_string()))
}
