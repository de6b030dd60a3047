use ih_core::Issue;

use serde::Serialize;

/// Issue DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct IssueDto {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub reporter_id: String,
    pub assignee_id: Option<String>,
    pub created_at: i64,
}

impl From<Issue> for IssueDto {
    fn from(i: Issue) -> Self {
        Self {
            id: i.id.to_string(),
            project_id: i.project_id.to_string(),
            title: i.title,
            description: i.description,
            status: i.status.as_str().to_string(),
            priority: i.priority.as_str().to_string(),
            reporter_id: i.reporter_id.to_string(),
            assignee_id: i.assignee_id.map(|id| id.to_string()),
            created_at: i.created_at.timestamp(),
        }
    }
}
