//! Redirect policy for the admin area.
//!
//! Evaluated per incoming request against a small fixed path set, exactly
//! mirroring the front-end routing:
//!
//! - anonymous + `/admin` -> redirect to `/admin/login`
//! - authenticated + `/admin/login` or `/admin/signup` -> redirect to `/admin`
//! - everything else passes through unchanged.
//!
//! Session classification itself is the pure function
//! [`crate::auth::session::classify`]; this module only decides where to
//! send each state.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::auth::session::{classify, SessionState};
use crate::state::AppState;

/// The protected admin landing path.
pub const PROTECTED_PATH: &str = "/admin";
/// Login page, reachable only while anonymous.
pub const LOGIN_PATH: &str = "/admin/login";
/// Signup page, reachable only while anonymous.
pub const SIGNUP_PATH: &str = "/admin/signup";

/// Layer-compatible middleware applying the redirect rules above.
///
/// Requests outside the matcher set (every API route, every public page)
/// are never classified at all.
pub async fn admin_gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path();
    let is_auth_page = path == LOGIN_PATH || path == SIGNUP_PATH;
    if !is_auth_page && path != PROTECTED_PATH {
        return next.run(request).await;
    }

    match (classify(request.headers(), &state.config.jwt), is_auth_page) {
        // Logged-in users have no business on the login/signup pages.
        (SessionState::Authenticated, true) => Redirect::temporary(PROTECTED_PATH).into_response(),
        // Anonymous users are sent to login before reaching the admin area.
        (SessionState::Anonymous, false) => Redirect::temporary(LOGIN_PATH).into_response(),
        _ => next.run(request).await,
    }
}
