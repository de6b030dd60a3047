use crate::{Issue, IssueStatus, Priority};

use uuid::Uuid;

/// Structured optional field set for partial issue updates.
///
/// PATCH semantics: `None` means "leave untouched", never "clear".
/// A field sent as JSON null is treated the same as an absent field,
/// so the assignee cannot be cleared through a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<IssueStatus>,
    pub priority: Option<Priority>,
    pub assignee_id: Option<Uuid>,
}

impl IssueChanges {
    /// True when the change set touches a field gated behind the
    /// manager role: status, assignee or priority.
    pub fn touches_sensitive(&self) -> bool {
        self.status.is_some() || self.priority.is_some() || self.assignee_id.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && !self.touches_sensitive()
    }

    /// Fold the present fields into an issue, leaving the rest alone.
    pub fn apply(&self, issue: &mut Issue) {
        if let Some(ref title) = self.title {
            issue.title = title.clone();
        }
        if let Some(ref description) = self.description {
            issue.description = Some(description.clone());
        }
        if let Some(status) = self.status {
            issue.status = status;
        }
        if let Some(priority) = self.priority {
            issue.priority = priority;
        }
        if let Some(assignee_id) = self.assignee_id {
            issue.assignee_id = Some(assignee_id);
        }
    }
}
