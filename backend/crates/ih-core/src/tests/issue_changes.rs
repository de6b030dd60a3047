use crate::{Issue, IssueChanges, IssueStatus, Priority};

use uuid::Uuid;

fn sample_issue() -> Issue {
    Issue::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        "broken login".to_string(),
        Some("fails on submit".to_string()),
        Priority::Medium,
        None,
    )
}

#[test]
fn test_empty_changes_touch_nothing() {
    let changes = IssueChanges::default();
    assert!(changes.is_empty());
    assert!(!changes.touches_sensitive());

    let mut issue = sample_issue();
    let before = issue.clone();
    changes.apply(&mut issue);
    assert_eq!(issue, before);
}

#[test]
fn test_touches_sensitive() {
    let title_only = IssueChanges {
        title: Some("renamed".to_string()),
        ..Default::default()
    };
    assert!(!title_only.touches_sensitive());

    let with_status = IssueChanges {
        status: Some(IssueStatus::Closed),
        ..Default::default()
    };
    let with_priority = IssueChanges {
        priority: Some(Priority::Low),
        ..Default::default()
    };
    let with_assignee = IssueChanges {
        assignee_id: Some(Uuid::new_v4()),
        ..Default::default()
    };
    assert!(with_status.touches_sensitive());
    assert!(with_priority.touches_sensitive());
    assert!(with_assignee.touches_sensitive());
}

#[test]
fn test_apply_only_present_fields() {
    let mut issue = sample_issue();
    let original_description = issue.description.clone();
    let assignee = Uuid::new_v4();

    let changes = IssueChanges {
        status: Some(IssueStatus::InProgress),
        assignee_id: Some(assignee),
        ..Default::default()
    };
    changes.apply(&mut issue);

    assert_eq!(issue.status, IssueStatus::InProgress);
    assert_eq!(issue.assignee_id, Some(assignee));
    // Absent fields stay untouched
    assert_eq!(issue.title, "broken login");
    assert_eq!(issue.description, original_description);
    assert_eq!(issue.priority, Priority::Medium);
}
