//! Authorization policy: pure decision functions over already-loaded
//! memberships. No side effects and no storage access, so the same
//! checks run against in-memory fixtures in unit tests.
//!
//! Callers load the actor's membership for the target project (or the
//! issue's project) and pass it here; `None` means "not a member".

use crate::{IssueChanges, ProjectMember, Role};

/// Any role counts as membership.
pub fn is_member(membership: Option<&ProjectMember>) -> bool {
    membership.is_some()
}

/// Manager role exactly.
pub fn is_manager(membership: Option<&ProjectMember>) -> bool {
    matches!(membership, Some(m) if m.role == Role::Manager)
}

/// Reading an issue requires membership in its project.
pub fn can_read_issue(membership: Option<&ProjectMember>) -> bool {
    is_member(membership)
}

/// Any member may file an issue.
pub fn can_create_issue(membership: Option<&ProjectMember>) -> bool {
    is_member(membership)
}

/// Any member may delete an issue.
pub fn can_delete_issue(membership: Option<&ProjectMember>) -> bool {
    is_member(membership)
}

/// Any member may read and write comments.
pub fn can_comment(membership: Option<&ProjectMember>) -> bool {
    is_member(membership)
}

/// Any member may list a project's memberships.
pub fn can_list_members(membership: Option<&ProjectMember>) -> bool {
    is_member(membership)
}

/// Only managers mutate project structure.
pub fn can_add_member(membership: Option<&ProjectMember>) -> bool {
    is_manager(membership)
}

/// Title and description are member-writable; status, assignee and
/// priority require the manager role.
pub fn can_update_issue(membership: Option<&ProjectMember>, changes: &IssueChanges) -> bool {
    if changes.touches_sensitive() {
        is_manager(membership)
    } else {
        is_member(membership)
    }
}
