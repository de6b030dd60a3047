use crate::{IssueStatus, Priority};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An issue filed against a project.
///
/// The reporter is fixed at creation and never user-settable afterwards.
/// Status, assignee and priority are the "sensitive" fields: only a
/// project manager may change them (see `policy`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: Uuid,
    pub project_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: IssueStatus,
    pub priority: Priority,
    pub reporter_id: Uuid,
    pub assignee_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Issue {
    /// Create a new open issue with the given priority (default medium).
    pub fn new(
        project_id: Uuid,
        reporter_id: Uuid,
        title: String,
        description: Option<String>,
        priority: Priority,
        assignee_id: Option<Uuid>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            title,
            description,
            status: IssueStatus::default(),
            priority,
            reporter_id,
            assignee_id,
            created_at: Utc::now(),
        }
    }
}
