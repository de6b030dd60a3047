//! Project REST API handlers

use crate::state::AppState;
use crate::{
    ApiError, ApiResult, CreateProjectRequest, CurrentUser, ProjectDto, ProjectListResponse,
    ProjectResponse,
};

use ih_core::Project;
use ih_db::ProjectRepository;

use axum::{Json, extract::State};

/// POST /api/projects
///
/// Create a project; the creator becomes its owner and is enrolled as
/// manager in the same transaction. A duplicate key is CONFLICT.
pub async fn create_project(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CreateProjectRequest>,
) -> ApiResult<Json<ProjectResponse>> {
    if req.name.trim().is_empty() {
        return Err(ApiError::validation(
            "name cannot be empty",
            Some("name".into()),
        ));
    }
    if req.key.trim().is_empty() {
        return Err(ApiError::validation(
            "key cannot be empty",
            Some("key".into()),
        ));
    }

    let project = Project::new(req.name, req.key, req.description, user.id);

    ProjectRepository::new(state.pool.clone())
        .create_with_owner(&project)
        .await
        .map_err(|e| match e {
            ih_db::DbError::Conflict { .. } => {
                ApiError::conflict(format!("Project key '{}' already exists", project.key))
            }
            other => other.into(),
        })?;

    Ok(Json(ProjectResponse {
        project: project.into(),
    }))
}

/// GET /api/projects
///
/// List projects where the caller holds a membership.
pub async fn list_projects(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<ProjectListResponse>> {
    let projects = ProjectRepository::new(state.pool.clone())
        .find_for_user(user.id)
        .await?;

    Ok(Json(ProjectListResponse {
        projects: projects.into_iter().map(ProjectDto::from).collect(),
    }))
}
