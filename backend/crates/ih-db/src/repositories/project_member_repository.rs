use crate::Result as DbErrorResult;
use crate::repositories::row::{parse_enum, parse_timestamp, parse_uuid};

use ih_core::ProjectMember;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct ProjectMemberRepository {
    pool: SqlitePool,
}

impl ProjectMemberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a membership. The UNIQUE (project_id, user_id) constraint
    /// rejects a second membership for the same pair as `Conflict`.
    pub async fn create(&self, member: &ProjectMember) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO project_members (id, project_id, user_id, role, joined_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(member.id.to_string())
        .bind(member.project_id.to_string())
        .bind(member.user_id.to_string())
        .bind(member.role.as_str())
        .bind(member.joined_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_user_and_project(
        &self,
        user_id: Uuid,
        project_id: Uuid,
    ) -> DbErrorResult<Option<ProjectMember>> {
        let user_id_str = user_id.to_string();
        let project_id_str = project_id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, project_id, user_id, role, joined_at
                FROM project_members
                WHERE user_id = ? AND project_id = ?
            "#,
        )
        .bind(user_id_str)
        .bind(project_id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| member_from_row(&r)).transpose()
    }

    pub async fn find_by_project(&self, project_id: Uuid) -> DbErrorResult<Vec<ProjectMember>> {
        let project_id_str = project_id.to_string();

        let rows = sqlx::query(
            r#"
                SELECT id, project_id, user_id, role, joined_at
                FROM project_members
                WHERE project_id = ?
                ORDER BY joined_at
            "#,
        )
        .bind(project_id_str)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(member_from_row).collect()
    }
}

fn member_from_row(row: &SqliteRow) -> DbErrorResult<ProjectMember> {
    Ok(ProjectMember {
        id: parse_uuid(&row.try_get::<String, _>("id")?, "project_members.id")?,
        project_id: parse_uuid(
            &row.try_get::<String, _>("project_id")?,
            "project_members.project_id",
        )?,
        user_id: parse_uuid(
            &row.try_get::<String, _>("user_id")?,
            "project_members.user_id",
        )?,
        role: parse_enum(&row.try_get::<String, _>("role")?, "project_members.role")?,
        joined_at: parse_timestamp(row.try_get("joined_at")?, "project_members.joined_at")?,
    })
}
