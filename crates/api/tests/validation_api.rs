//! Validation-path tests for the resource and auth endpoints.
//!
//! These requests are all rejected before any database query or media-host
//! call happens, so they run against the lazy pool with no Postgres and no
//! network.

mod common;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn multipart_request(
    method: Method,
    uri: &str,
    fields: &[(&str, &str)],
    image: Option<&[u8]>,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, common::multipart_content_type())
        .body(Body::from(common::multipart_body(fields, image)))
        .unwrap()
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

#[tokio::test]
async fn contact_create_with_missing_field_returns_400() {
    let app = common::build_test_app();

    let request = json_request(
        Method::POST,
        "/api/contact",
        serde_json::json!({ "name": "Ada", "email": "ada@example.com" }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "message is required");
}

#[tokio::test]
async fn contact_create_with_empty_field_returns_400() {
    let app = common::build_test_app();

    let request = json_request(
        Method::POST,
        "/api/contact",
        serde_json::json!({ "name": "", "email": "ada@example.com", "message": "hi" }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["error"], "name is required");
}

#[tokio::test]
async fn contact_update_without_id_returns_400() {
    let app = common::build_test_app();

    let request = json_request(
        Method::PUT,
        "/api/contact",
        serde_json::json!({ "name": "Ada" }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "id query parameter is required");
}

#[tokio::test]
async fn contact_update_with_non_numeric_id_returns_400() {
    let app = common::build_test_app();

    let request = json_request(
        Method::PUT,
        "/api/contact?id=abc",
        serde_json::json!({ "name": "Ada" }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Carousel
// ---------------------------------------------------------------------------

#[tokio::test]
async fn carousel_create_without_image_returns_400() {
    let app = common::build_test_app();

    let request = multipart_request(
        Method::POST,
        "/api/carousel",
        &[("title", "Welcome"), ("black", "true")],
        None,
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "image file is required");
}

#[tokio::test]
async fn carousel_create_without_title_returns_400() {
    let app = common::build_test_app();

    let request = multipart_request(
        Method::POST,
        "/api/carousel",
        &[("black", "false")],
        Some(b"fake-jpeg-bytes"),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["error"], "title is required");
}

#[tokio::test]
async fn carousel_delete_without_id_returns_400() {
    let app = common::build_test_app();

    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/carousel")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["error"], "id query parameter is required");
}

// ---------------------------------------------------------------------------
// Post
// ---------------------------------------------------------------------------

#[tokio::test]
async fn post_create_without_tags_returns_400() {
    let app = common::build_test_app();

    let request = multipart_request(
        Method::POST,
        "/api/post",
        &[("title", "Hackathon recap"), ("description", "We built things")],
        Some(b"fake-jpeg-bytes"),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["error"], "tags is required");
}

#[tokio::test]
async fn post_update_without_id_returns_400() {
    let app = common::build_test_app();

    let request = multipart_request(Method::PUT, "/api/post", &[("title", "New title")], None);
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["error"], "id query parameter is required");
}

// ---------------------------------------------------------------------------
// Team
// ---------------------------------------------------------------------------

#[tokio::test]
async fn team_create_with_unknown_batch_returns_400() {
    let app = common::build_test_app();

    let request = multipart_request(
        Method::POST,
        "/api/team",
        &[
            ("name", "Grace"),
            ("position", "Lead"),
            ("batch", "2010-2014"),
            ("quote", "Ship it"),
        ],
        Some(b"fake-jpeg-bytes"),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(
        json["error"].as_str().unwrap().contains("2010-2014"),
        "error should name the rejected batch"
    );
}

#[tokio::test]
async fn team_create_without_quote_returns_400() {
    let app = common::build_test_app();

    let request = multipart_request(
        Method::POST,
        "/api/team",
        &[
            ("name", "Grace"),
            ("position", "Lead"),
            ("batch", "2022-2026"),
        ],
        Some(b"fake-jpeg-bytes"),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["error"], "quote is required");
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[tokio::test]
async fn signup_with_missing_password_returns_400() {
    let app = common::build_test_app();

    let request = json_request(
        Method::POST,
        "/api/user/signup",
        serde_json::json!({ "username": "admin", "email": "admin@example.com" }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["error"], "password is required");
}

#[tokio::test]
async fn login_with_missing_email_returns_400() {
    let app = common::build_test_app();

    let request = json_request(
        Method::POST,
        "/api/user/login",
        serde_json::json!({ "password": "hunter2" }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["error"], "email is required");
}
