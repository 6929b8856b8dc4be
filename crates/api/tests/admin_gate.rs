//! Tests for the admin gate redirect policy, driven through the full
//! router via `oneshot` so the middleware stack matches production.

mod common;

use axum::body::Body;
use axum::http::header::{COOKIE, LOCATION};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use hub_api::auth::jwt::{generate_token, JwtConfig};

fn session_token() -> String {
    let config = JwtConfig {
        secret: common::TEST_JWT_SECRET.to_string(),
        token_expiry_hours: 24,
    };
    generate_token(1, "admin", &config).expect("token generation should succeed")
}

#[tokio::test]
async fn anonymous_admin_request_redirects_to_login() {
    let app = common::build_test_app();

    let response = app
        .oneshot(Request::builder().uri("/admin").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[LOCATION], "/admin/login");
}

#[tokio::test]
async fn authenticated_login_request_redirects_to_admin() {
    let app = common::build_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/admin/login")
                .header(COOKIE, format!("token={}", session_token()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[LOCATION], "/admin");
}

#[tokio::test]
async fn authenticated_signup_request_redirects_to_admin() {
    let app = common::build_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/admin/signup")
                .header(COOKIE, format!("token={}", session_token()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[LOCATION], "/admin");
}

#[tokio::test]
async fn authenticated_admin_request_passes_through() {
    let app = common::build_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/admin")
                .header(COOKIE, format!("token={}", session_token()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // No static bundle is configured in tests, so a pass-through lands on
    // the router's 404 -- the point is that it is NOT a redirect.
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn anonymous_login_request_passes_through() {
    let app = common::build_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/admin/login")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn garbage_token_counts_as_anonymous() {
    let app = common::build_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/admin")
                .header(COOKIE, "token=not-a-real-jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[LOCATION], "/admin/login");
}

#[tokio::test]
async fn paths_outside_the_matcher_are_untouched() {
    let app = common::build_test_app();

    // A nested admin path is not in the fixed matcher set and must not be
    // classified or redirected.
    let response = app
        .oneshot(
            Request::builder()
                .uri("/admin/anything-else")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
