use crate::ApiResult;

use ih_core::{IssueChanges, IssueStatus, Priority};

use std::str::FromStr;

use serde::Deserialize;
use uuid::Uuid;

/// Request body for partially updating an issue.
///
/// Absent fields and fields sent as JSON null both mean "leave
/// untouched"; nothing can be cleared through this endpoint.
#[derive(Debug, Deserialize)]
pub struct UpdateIssueRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub assignee_id: Option<String>,
}

impl UpdateIssueRequest {
    /// Parse the raw strings into a typed change set. Unknown status
    /// or priority names and malformed UUIDs are validation errors.
    pub fn into_changes(self) -> ApiResult<IssueChanges> {
        let status = self.status.as_deref().map(IssueStatus::from_str).transpose()?;
        let priority = self.priority.as_deref().map(Priority::from_str).transpose()?;
        let assignee_id = self.assignee_id.as_deref().map(Uuid::parse_str).transpose()?;

        Ok(IssueChanges {
            title: self.title,
            description: self.description,
            status,
            priority,
            assignee_id,
        })
    }
}
