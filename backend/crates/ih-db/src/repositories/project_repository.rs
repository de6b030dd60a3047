//! Project repository.
//!
//! Project creation is the one compound transaction in the system: the
//! project row and the owner's manager membership commit together or
//! not at all. A project without its owner-manager membership is an
//! invariant violation.

use crate::Result as DbErrorResult;
use crate::repositories::row::{parse_timestamp, parse_uuid};

use ih_core::{Project, ProjectMember, Role};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the project and enroll its owner as manager in one
    /// transaction. A duplicate key rolls back both inserts and
    /// surfaces as `DbError::Conflict`.
    pub async fn create_with_owner(&self, project: &Project) -> DbErrorResult<ProjectMember> {
        let membership = ProjectMember::new(project.id, project.owner_id, Role::Manager);

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
                INSERT INTO projects (id, name, key, description, owner_id, created_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(&project.name)
        .bind(&project.key)
        .bind(&project.description)
        .bind(project.owner_id.to_string())
        .bind(project.created_at.timestamp())
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
                INSERT INTO project_members (id, project_id, user_id, role, joined_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(membership.id.to_string())
        .bind(membership.project_id.to_string())
        .bind(membership.user_id.to_string())
        .bind(membership.role.as_str())
        .bind(membership.joined_at.timestamp())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(membership)
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Project>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, name, key, description, owner_id, created_at
                FROM projects
                WHERE id = ?
            "#,
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| project_from_row(&r)).transpose()
    }

    pub async fn find_by_key(&self, key: &str) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, key, description, owner_id, created_at
                FROM projects
                WHERE key = ?
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| project_from_row(&r)).transpose()
    }

    /// All projects where the user holds any membership.
    pub async fn find_for_user(&self, user_id: Uuid) -> DbErrorResult<Vec<Project>> {
        let user_id_str = user_id.to_string();

        let rows = sqlx::query(
            r#"
                SELECT p.id, p.name, p.key, p.description, p.owner_id, p.created_at
                FROM projects p
                JOIN project_members m ON m.project_id = p.id
                WHERE m.user_id = ?
                ORDER BY p.created_at
            "#,
        )
        .bind(user_id_str)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(project_from_row).collect()
    }
}

fn project_from_row(row: &SqliteRow) -> DbErrorResult<Project> {
    Ok(Project {
        id: parse_uuid(&row.try_get::<String, _>("id")?, "projects.id")?,
        name: row.try_get("name")?,
        key: row.try_get("key")?,
        description: row.try_get("description")?,
        owner_id: parse_uuid(&row.try_get::<String, _>("owner_id")?, "projects.owner_id")?,
        created_at: parse_timestamp(row.try_get("created_at")?, "projects.created_at")?,
    })
}
