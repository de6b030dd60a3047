use serde::Deserialize;

/// Query parameters for listing a project's issues
#[derive(Debug, Deserialize)]
pub struct ListIssuesQuery {
    /// Case-insensitive substring match against title or description
    pub q: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    /// Assignee user id
    pub assignee: Option<String>,
    /// "created_at" (newest first) or "priority"
    pub sort: Option<String>,
}
