//! Membership REST API handlers

use crate::state::AppState;
use crate::{AddMemberRequest, ApiError, ApiResult, CurrentUser, MemberDto, MemberListResponse};

use ih_core::{ProjectMember, Role, policy};
use ih_db::{ProjectMemberRepository, ProjectRepository, UserRepository};

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

/// POST /api/projects/{project_id}/members
///
/// Enroll an existing user in a project. Manager only. An unknown
/// project or email is 404; enrolling the same user twice is CONFLICT.
pub async fn add_member(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(project_id): Path<String>,
    Json(req): Json<AddMemberRequest>,
) -> ApiResult<Json<MemberDto>> {
    let project_id = Uuid::parse_str(&project_id)?;
    let role = Role::from_str(&req.role)?;

    let project = ProjectRepository::new(state.pool.clone())
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Project {} not found", project_id)))?;

    let members = ProjectMemberRepository::new(state.pool.clone());
    let membership = members
        .find_by_user_and_project(user.id, project.id)
        .await?;
    if !policy::can_add_member(membership.as_ref()) {
        return Err(ApiError::forbidden("Only a project manager may add members"));
    }

    let new_member = UserRepository::new(state.pool.clone())
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("No user with email {}", req.email)))?;

    let member = ProjectMember::new(project.id, new_member.id, role);
    members.create(&member).await.map_err(|e| match e {
        ih_db::DbError::Conflict { .. } => {
            ApiError::conflict("User is already a member of this project")
        }
        other => other.into(),
    })?;

    Ok(Json(MemberDto::from(member)))
}

/// GET /api/projects/{project_id}/members
///
/// List a project's memberships. Any member may look.
pub async fn list_members(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(project_id): Path<String>,
) -> ApiResult<Json<MemberListResponse>> {
    let project_id = Uuid::parse_str(&project_id)?;

    let project = ProjectRepository::new(state.pool.clone())
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Project {} not found", project_id)))?;

    let repo = ProjectMemberRepository::new(state.pool.clone());
    let membership = repo.find_by_user_and_project(user.id, project.id).await?;
    if !policy::can_list_members(membership.as_ref()) {
        return Err(ApiError::forbidden("Not a member of this project"));
    }

    let members = repo.find_by_project(project.id).await?;

    Ok(Json(MemberListResponse {
        members: members.into_iter().map(MemberDto::from).collect(),
    }))
}
