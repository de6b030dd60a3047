//! Comment REST API handlers
//!
//! Comments are append-only: no update or delete endpoint exists.

use crate::api::issues::issues::load_membership;
use crate::state::AppState;
use crate::{
    ApiError, ApiResult, CommentDto, CommentListResponse, CreateCommentRequest, CurrentUser,
};

use ih_core::{Comment, policy};
use ih_db::{CommentRepository, IssueRepository};

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

/// GET /api/issues/{id}/comments
///
/// Chronological list, oldest first.
pub async fn list_comments(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<CommentListResponse>> {
    let issue_id = Uuid::parse_str(&id)?;

    let issue = IssueRepository::new(state.pool.clone())
        .find_by_id(issue_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Issue {} not found", id)))?;

    let membership = load_membership(&state.pool, user.id, issue.project_id).await?;
    if !policy::can_comment(membership.as_ref()) {
        return Err(ApiError::forbidden("Not a member of this project"));
    }

    let comments = CommentRepository::new(state.pool.clone())
        .find_by_issue(issue.id)
        .await?;

    Ok(Json(CommentListResponse {
        comments: comments.into_iter().map(CommentDto::from).collect(),
    }))
}

/// POST /api/issues/{id}/comments
///
/// Append a comment. Any member of the issue's project may write.
pub async fn create_comment(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    Json(req): Json<CreateCommentRequest>,
) -> ApiResult<Json<CommentDto>> {
    let issue_id = Uuid::parse_str(&id)?;

    if req.body.trim().is_empty() {
        return Err(ApiError::validation(
            "body cannot be empty",
            Some("body".into()),
        ));
    }

    let issue = IssueRepository::new(state.pool.clone())
        .find_by_id(issue_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Issue {} not found", id)))?;

    let membership = load_membership(&state.pool, user.id, issue.project_id).await?;
    if !policy::can_comment(membership.as_ref()) {
        return Err(ApiError::forbidden("Not a member of this project"));
    }

    let comment = Comment::new(issue.id, user.id, req.body);
    CommentRepository::new(state.pool.clone())
        .create(&comment)
        .await?;

    Ok(Json(CommentDto::from(comment)))
}
