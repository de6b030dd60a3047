#![allow(dead_code)]

//! Test infrastructure for ih-server API tests

use ih_server::state::AppState;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

const TEST_SECRET: &[u8] = b"test-secret-0123456789abcdef0123";

/// Create AppState backed by an in-memory database
pub async fn create_test_app_state() -> AppState {
    let pool = ih_db::pool::connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState::new(pool, TEST_SECRET, chrono::Duration::hours(1))
}

/// Send a JSON request and return (status, parsed body)
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Register a user and return the response body
pub async fn signup(app: &Router, name: &str, email: &str, password: &str) -> serde_json::Value {
    let (status, body) = send_json(
        app,
        "POST",
        "/auth/signup",
        None,
        Some(serde_json::json!({
            "name": name,
            "email": email,
            "password": password,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "signup failed: {}", body);
    body
}

/// Log in with form credentials and return the bearer token
pub async fn login(app: &Router, email: &str, password: &str) -> String {
    let form = format!(
        "username={}&password={}",
        urlencode(email),
        urlencode(password)
    );

    let request = Request::builder()
        .method("POST")
        .uri("/auth/login")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(status, StatusCode::OK, "login failed: {}", json);

    json["access_token"].as_str().unwrap().to_string()
}

/// Register, log in, and return the token in one step
pub async fn signup_and_login(app: &Router, name: &str, email: &str) -> String {
    signup(app, name, email, "password123").await;
    login(app, email, "password123").await
}

/// Create a project and return its id
pub async fn create_project(app: &Router, token: &str, name: &str, key: &str) -> String {
    let (status, body) = send_json(
        app,
        "POST",
        "/api/projects",
        Some(token),
        Some(serde_json::json!({ "name": name, "key": key })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create_project failed: {}", body);
    body["project"]["id"].as_str().unwrap().to_string()
}

/// Create an issue and return its id
pub async fn create_issue(app: &Router, token: &str, project_id: &str, title: &str) -> String {
    let (status, body) = send_json(
        app,
        "POST",
        &format!("/api/projects/{}/issues", project_id),
        Some(token),
        Some(serde_json::json!({ "title": title })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create_issue failed: {}", body);
    body["issue"]["id"].as_str().unwrap().to_string()
}

/// Add a member by email; asserts success
pub async fn add_member(app: &Router, token: &str, project_id: &str, email: &str, role: &str) {
    let (status, body) = send_json(
        app,
        "POST",
        &format!("/api/projects/{}/members", project_id),
        Some(token),
        Some(serde_json::json!({ "email": email, "role": role })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "add_member failed: {}", body);
}

/// Minimal form-urlencoding for test credentials
fn urlencode(s: &str) -> String {
    s.replace('%', "%25")
        .replace('&', "%26")
        .replace('=', "%3D")
        .replace('+', "%2B")
        .replace(' ', "%20")
        .replace('@', "%40")
}
