use ih_core::ProjectMember;

use serde::Serialize;

/// Membership DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct MemberDto {
    pub id: String,
    pub project_id: String,
    pub user_id: String,
    pub role: String,
    pub joined_at: i64,
}

impl From<ProjectMember> for MemberDto {
    fn from(m: ProjectMember) -> Self {
        Self {
            id: m.id.to_string(),
            project_id: m.project_id.to_string(),
            user_id: m.user_id.to_string(),
            role: m.role.as_str().to_string(),
            joined_at: m.joined_at.timestamp(),
        }
    }
}
