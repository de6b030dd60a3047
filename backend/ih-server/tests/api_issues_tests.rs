//! Integration tests for issue endpoints
mod common;

use crate::common::{
    add_member, create_issue, create_project, create_test_app_state, send_json, signup_and_login,
};

use axum::http::StatusCode;
use uuid::Uuid;

use ih_server::routes::build_router;

#[tokio::test]
async fn test_create_issue_defaults() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    let alice = signup_and_login(&app, "Alice", "alice@example.com").await;
    let project_id = create_project(&app, &alice, "Test Project", "TP1").await;

    let (status, body) = send_json(
        &app,
        "POST",
        &format!("/api/projects/{}/issues", project_id),
        Some(&alice),
        Some(serde_json::json!({ "title": "Login button misaligned" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["issue"]["status"], "open");
    assert_eq!(body["issue"]["priority"], "medium");
    assert_eq!(body["issue"]["assignee_id"], serde_json::Value::Null);
    assert!(body["issue"]["reporter_id"].as_str().is_some());
}

#[tokio::test]
async fn test_create_issue_invalid_priority_rejected() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    let alice = signup_and_login(&app, "Alice", "alice@example.com").await;
    let project_id = create_project(&app, &alice, "Test Project", "TP1").await;

    let (status, body) = send_json(
        &app,
        "POST",
        &format!("/api/projects/{}/issues", project_id),
        Some(&alice),
        Some(serde_json::json!({ "title": "Bad", "priority": "urgent" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_issue_non_member_forbidden() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    let alice = signup_and_login(&app, "Alice", "alice@example.com").await;
    let bob = signup_and_login(&app, "Bob", "bob@example.com").await;
    let project_id = create_project(&app, &alice, "Test Project", "TP1").await;

    let (status, _) = send_json(
        &app,
        "POST",
        &format!("/api/projects/{}/issues", project_id),
        Some(&bob),
        Some(serde_json::json!({ "title": "Intruder" })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_list_issues_text_filter() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    let alice = signup_and_login(&app, "Alice", "alice@example.com").await;
    let project_id = create_project(&app, &alice, "Test Project", "TP1").await;

    create_issue(&app, &alice, &project_id, "Crash on LOGIN page").await;
    create_issue(&app, &alice, &project_id, "Slow dashboard").await;

    let (status, body) = send_json(
        &app,
        "GET",
        &format!("/api/projects/{}/issues?q=login", project_id),
        Some(&alice),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let issues = body["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["title"], "Crash on LOGIN page");
}

#[tokio::test]
async fn test_list_issues_invalid_status_filter_rejected() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    let alice = signup_and_login(&app, "Alice", "alice@example.com").await;
    let project_id = create_project(&app, &alice, "Test Project", "TP1").await;

    let (status, body) = send_json(
        &app,
        "GET",
        &format!("/api/projects/{}/issues?status=stalled", project_id),
        Some(&alice),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_list_issues_status_filter() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    let alice = signup_and_login(&app, "Alice", "alice@example.com").await;
    let project_id = create_project(&app, &alice, "Test Project", "TP1").await;

    let issue_id = create_issue(&app, &alice, &project_id, "First").await;
    create_issue(&app, &alice, &project_id, "Second").await;

    // Close the first issue (owner is manager, may change status)
    let (status, _) = send_json(
        &app,
        "PATCH",
        &format!("/api/issues/{}", issue_id),
        Some(&alice),
        Some(serde_json::json!({ "status": "closed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send_json(
        &app,
        "GET",
        &format!("/api/projects/{}/issues?status=open", project_id),
        Some(&alice),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let issues = body["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["title"], "Second");
}

#[tokio::test]
async fn test_get_issue_unknown_not_found() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    let alice = signup_and_login(&app, "Alice", "alice@example.com").await;

    let (status, _) = send_json(
        &app,
        "GET",
        &format!("/api/issues/{}", Uuid::new_v4()),
        Some(&alice),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_issue_non_member_forbidden() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    let alice = signup_and_login(&app, "Alice", "alice@example.com").await;
    let bob = signup_and_login(&app, "Bob", "bob@example.com").await;
    let project_id = create_project(&app, &alice, "Test Project", "TP1").await;
    let issue_id = create_issue(&app, &alice, &project_id, "Private").await;

    let (status, _) = send_json(
        &app,
        "GET",
        &format!("/api/issues/{}", issue_id),
        Some(&bob),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_developer_may_edit_title_but_not_status() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    let alice = signup_and_login(&app, "Alice", "alice@example.com").await;
    let bob = signup_and_login(&app, "Bob", "bob@example.com").await;
    let project_id = create_project(&app, &alice, "Test Project", "TP1").await;
    add_member(&app, &alice, &project_id, "bob@example.com", "developer").await;
    let issue_id = create_issue(&app, &alice, &project_id, "Original title").await;

    // Title edit: member-level, allowed
    let (status, body) = send_json(
        &app,
        "PATCH",
        &format!("/api/issues/{}", issue_id),
        Some(&bob),
        Some(serde_json::json!({ "title": "Better title" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["issue"]["title"], "Better title");

    // Status change: manager-gated, denied
    let (status, body) = send_json(
        &app,
        "PATCH",
        &format!("/api/issues/{}", issue_id),
        Some(&bob),
        Some(serde_json::json!({ "status": "in_progress" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_manager_may_change_status() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    let alice = signup_and_login(&app, "Alice", "alice@example.com").await;
    let project_id = create_project(&app, &alice, "Test Project", "TP1").await;
    let issue_id = create_issue(&app, &alice, &project_id, "Needs triage").await;

    let (status, body) = send_json(
        &app,
        "PATCH",
        &format!("/api/issues/{}", issue_id),
        Some(&alice),
        Some(serde_json::json!({ "status": "in_progress", "priority": "high" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["issue"]["status"], "in_progress");
    assert_eq!(body["issue"]["priority"], "high");
}

#[tokio::test]
async fn test_patch_null_field_leaves_value_untouched() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    let alice = signup_and_login(&app, "Alice", "alice@example.com").await;
    let project_id = create_project(&app, &alice, "Test Project", "TP1").await;
    let issue_id = create_issue(&app, &alice, &project_id, "Keep me").await;

    // JSON null means "leave untouched", not "clear"
    let (status, body) = send_json(
        &app,
        "PATCH",
        &format!("/api/issues/{}", issue_id),
        Some(&alice),
        Some(serde_json::json!({ "title": null, "description": "now described" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["issue"]["title"], "Keep me");
    assert_eq!(body["issue"]["description"], "now described");
}

#[tokio::test]
async fn test_patch_invalid_status_rejected() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    let alice = signup_and_login(&app, "Alice", "alice@example.com").await;
    let project_id = create_project(&app, &alice, "Test Project", "TP1").await;
    let issue_id = create_issue(&app, &alice, &project_id, "Bad patch").await;

    let (status, body) = send_json(
        &app,
        "PATCH",
        &format!("/api/issues/{}", issue_id),
        Some(&alice),
        Some(serde_json::json!({ "status": "finished" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_delete_issue_acknowledges_and_404s_after() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    let alice = signup_and_login(&app, "Alice", "alice@example.com").await;
    let project_id = create_project(&app, &alice, "Test Project", "TP1").await;
    let issue_id = create_issue(&app, &alice, &project_id, "Doomed").await;

    let (status, body) = send_json(
        &app,
        "DELETE",
        &format!("/api/issues/{}", issue_id),
        Some(&alice),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted_id"], issue_id);

    let (status, _) = send_json(
        &app,
        "GET",
        &format!("/api/issues/{}", issue_id),
        Some(&alice),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Deleting again is 404, not a second ack
    let (status, _) = send_json(
        &app,
        "DELETE",
        &format!("/api/issues/{}", issue_id),
        Some(&alice),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
