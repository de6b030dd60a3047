#![allow(dead_code)]

use ih_core::{Comment, Issue, IssueStatus, Priority, Project, User};

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// In-memory pool with the schema migrated and foreign keys on.
pub async fn create_test_pool() -> SqlitePool {
    ih_db::pool::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

pub fn create_test_user(label: &str) -> User {
    User::new(
        format!("User {label}"),
        format!("{label}@example.com"),
        "not-a-real-hash".to_string(),
    )
}

/// Inserts a user row so foreign key constraints are satisfiable.
pub async fn insert_user(pool: &SqlitePool, user: &User) {
    ih_db::UserRepository::new(pool.clone())
        .create(user)
        .await
        .expect("Failed to insert test user");
}

pub fn create_test_project(owner_id: Uuid) -> Project {
    Project::new(
        "Test Project".to_string(),
        "TESTPROJ".to_string(),
        Some("Test project description".to_string()),
        owner_id,
    )
}

pub fn create_test_issue(project_id: Uuid, reporter_id: Uuid, title: &str) -> Issue {
    Issue::new(
        project_id,
        reporter_id,
        title.to_string(),
        Some("Test issue description".to_string()),
        Priority::Medium,
        None,
    )
}

/// An issue pinned to an explicit creation time, for ordering tests.
pub fn create_test_issue_at(
    project_id: Uuid,
    reporter_id: Uuid,
    title: &str,
    created_at: DateTime<Utc>,
) -> Issue {
    Issue {
        id: Uuid::new_v4(),
        project_id,
        title: title.to_string(),
        description: None,
        status: IssueStatus::Open,
        priority: Priority::Medium,
        reporter_id,
        assignee_id: None,
        created_at,
    }
}

pub fn create_test_comment_at(
    issue_id: Uuid,
    author_id: Uuid,
    body: &str,
    created_at: DateTime<Utc>,
) -> Comment {
    Comment {
        id: Uuid::new_v4(),
        issue_id,
        author_id,
        body: body.to_string(),
        created_at,
    }
}

/// Project plus its owner, persisted, ready for issue tests.
pub async fn seed_project(pool: &SqlitePool) -> (Project, User) {
    let owner = create_test_user("owner");
    insert_user(pool, &owner).await;

    let project = create_test_project(owner.id);
    ih_db::ProjectRepository::new(pool.clone())
        .create_with_owner(&project)
        .await
        .expect("Failed to seed project");

    (project, owner)
}
