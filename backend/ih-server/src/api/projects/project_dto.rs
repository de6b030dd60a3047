use ih_core::Project;

use serde::Serialize;

/// Project DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct ProjectDto {
    pub id: String,
    pub name: String,
    pub key: String,
    pub description: Option<String>,
    pub owner_id: String,
    pub created_at: i64,
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name,
            key: p.key,
            description: p.description,
            owner_id: p.owner_id.to_string(),
            created_at: p.created_at.timestamp(),
        }
    }
}
