//! Issue REST API handlers

use crate::state::AppState;
use crate::{
    ApiError, ApiResult, CreateIssueRequest, CurrentUser, DeleteResponse, IssueDto,
    IssueListResponse, IssueResponse, ListIssuesQuery, UpdateIssueRequest,
};

use ih_core::{Issue, Priority, ProjectMember, policy};
use ih_db::{IssueFilter, IssueRepository, IssueSort, ProjectMemberRepository, ProjectRepository};

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use sqlx::SqlitePool;
use uuid::Uuid;

/// POST /api/projects/{project_id}/issues
///
/// File an issue. Any member may report; the reporter is fixed here
/// and never user-settable afterwards.
pub async fn create_issue(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(project_id): Path<String>,
    Json(req): Json<CreateIssueRequest>,
) -> ApiResult<Json<IssueResponse>> {
    let project_id = Uuid::parse_str(&project_id)?;

    if req.title.trim().is_empty() {
        return Err(ApiError::validation(
            "title cannot be empty",
            Some("title".into()),
        ));
    }
    let priority = match req.priority.as_deref() {
        Some(p) => Priority::from_str(p)?,
        None => Priority::default(),
    };
    let assignee_id = req.assignee_id.as_deref().map(Uuid::parse_str).transpose()?;

    let project = ProjectRepository::new(state.pool.clone())
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Project {} not found", project_id)))?;

    let membership = load_membership(&state.pool, user.id, project.id).await?;
    if !policy::can_create_issue(membership.as_ref()) {
        return Err(ApiError::forbidden("Not a member of this project"));
    }

    let issue = Issue::new(
        project.id,
        user.id,
        req.title,
        req.description,
        priority,
        assignee_id,
    );
    IssueRepository::new(state.pool.clone()).create(&issue).await?;

    Ok(Json(IssueResponse {
        issue: issue.into(),
    }))
}

/// GET /api/projects/{project_id}/issues
///
/// List a project's issues with optional filters. Filters compose
/// conjunctively; an unrecognized sort value means engine order.
pub async fn list_issues(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(project_id): Path<String>,
    Query(query): Query<ListIssuesQuery>,
) -> ApiResult<Json<IssueListResponse>> {
    let project_id = Uuid::parse_str(&project_id)?;

    let filter = IssueFilter {
        q: query.q,
        status: query.status.as_deref().map(FromStr::from_str).transpose()?,
        priority: query.priority.as_deref().map(FromStr::from_str).transpose()?,
        assignee_id: query.assignee.as_deref().map(Uuid::parse_str).transpose()?,
        sort: query.sort.as_deref().and_then(|s| match s {
            "created_at" => Some(IssueSort::CreatedAt),
            "priority" => Some(IssueSort::Priority),
            _ => None,
        }),
    };

    let project = ProjectRepository::new(state.pool.clone())
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Project {} not found", project_id)))?;

    let membership = load_membership(&state.pool, user.id, project.id).await?;
    if !policy::can_read_issue(membership.as_ref()) {
        return Err(ApiError::forbidden("Not a member of this project"));
    }

    let issues = IssueRepository::new(state.pool.clone())
        .find_by_project(project.id, &filter)
        .await?;

    Ok(Json(IssueListResponse {
        issues: issues.into_iter().map(IssueDto::from).collect(),
    }))
}

/// GET /api/issues/{id}
///
/// Retrieve a single issue. Unknown id is 404 before any policy
/// check; a non-member of its project gets 403.
pub async fn get_issue(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<IssueResponse>> {
    let issue_id = Uuid::parse_str(&id)?;

    let issue = IssueRepository::new(state.pool.clone())
        .find_by_id(issue_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Issue {} not found", id)))?;

    let membership = load_membership(&state.pool, user.id, issue.project_id).await?;
    if !policy::can_read_issue(membership.as_ref()) {
        return Err(ApiError::forbidden("Not a member of this project"));
    }

    Ok(Json(IssueResponse {
        issue: issue.into(),
    }))
}

/// PATCH /api/issues/{id}
///
/// Partial update. Title and description are member-writable; status,
/// priority and assignee require the manager role. Validation runs
/// before the policy check so malformed input never reaches it.
pub async fn update_issue(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateIssueRequest>,
) -> ApiResult<Json<IssueResponse>> {
    let issue_id = Uuid::parse_str(&id)?;
    let changes = req.into_changes()?;

    let repo = IssueRepository::new(state.pool.clone());
    let mut issue = repo
        .find_by_id(issue_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Issue {} not found", id)))?;

    let membership = load_membership(&state.pool, user.id, issue.project_id).await?;
    if !policy::can_update_issue(membership.as_ref(), &changes) {
        return Err(if policy::is_member(membership.as_ref()) {
            ApiError::forbidden("Only a project manager may change status, priority or assignee")
        } else {
            ApiError::forbidden("Not a member of this project")
        });
    }

    changes.apply(&mut issue);
    repo.update(&issue).await?;

    Ok(Json(IssueResponse {
        issue: issue.into(),
    }))
}

/// DELETE /api/issues/{id}
///
/// Hard delete; comments go with the issue. Any member may delete.
pub async fn delete_issue(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let issue_id = Uuid::parse_str(&id)?;

    let repo = IssueRepository::new(state.pool.clone());
    let issue = repo
        .find_by_id(issue_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Issue {} not found", id)))?;

    let membership = load_membership(&state.pool, user.id, issue.project_id).await?;
    if !policy::can_delete_issue(membership.as_ref()) {
        return Err(ApiError::forbidden("Not a member of this project"));
    }

    if !repo.delete(issue.id).await? {
        return Err(ApiError::not_found(format!("Issue {} not found", id)));
    }

    Ok(Json(DeleteResponse {
        deleted_id: issue.id.to_string(),
    }))
}

/// The actor's membership in the target project, or None.
pub(crate) async fn load_membership(
    pool: &SqlitePool,
    user_id: Uuid,
    project_id: Uuid,
) -> ApiResult<Option<ProjectMember>> {
    Ok(ProjectMemberRepository::new(pool.clone())
        .find_by_user_and_project(user_id, project_id)
        .await?)
}
