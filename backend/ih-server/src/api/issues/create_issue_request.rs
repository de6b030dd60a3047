use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateIssueRequest {
    /// Issue title (required)
    pub title: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Priority name; defaults to "medium" when absent
    #[serde(default)]
    pub priority: Option<String>,

    /// Optional assignee user id
    #[serde(default)]
    pub assignee_id: Option<String>,
}
