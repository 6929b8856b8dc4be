//! Cookie-based session classification.
//!
//! The session credential is the `token` cookie set at login. Classification
//! is a pure function from request headers to a [`SessionState`] tag; the
//! redirect policy built on top of it lives in the admin gate middleware so
//! both are independently testable.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

use super::jwt::{validate_token, JwtConfig};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "token";

/// Per-request authentication state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// A valid session token cookie is present.
    Authenticated,
    /// No cookie, or the token failed verification.
    Anonymous,
}

/// Classify a request from its headers.
///
/// Anything short of a well-formed, correctly signed, unexpired token is
/// `Anonymous`; classification never fails.
pub fn classify(headers: &HeaderMap, config: &JwtConfig) -> SessionState {
    let token = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|header| cookie_value(header, SESSION_COOKIE));

    match token {
        Some(token) if validate_token(token, config).is_ok() => SessionState::Authenticated,
        _ => SessionState::Anonymous,
    }
}

/// Extract a cookie's value from a `Cookie` header string.
///
/// Cookie headers are `name=value` pairs separated by `; `. Returns the
/// first match; an empty value counts as absent.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name && !value.is_empty()).then_some(value)
    })
}

/// Build the `Set-Cookie` value that establishes a session.
///
/// `HttpOnly` keeps the token away from page scripts; `SameSite=Lax` still
/// allows the top-level redirect flows the admin gate relies on.
pub fn session_cookie(token: &str, max_age_secs: i64) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}")
}

/// Build the `Set-Cookie` value that clears the session.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
