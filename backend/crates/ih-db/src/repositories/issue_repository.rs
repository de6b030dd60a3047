use crate::Result as DbErrorResult;
use crate::repositories::row::{parse_enum, parse_opt_uuid, parse_timestamp, parse_uuid};

use ih_core::{Issue, IssueStatus, Priority};

use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use uuid::Uuid;

/// Optional filters for listing a project's issues; all present filters
/// compose conjunctively.
#[derive(Debug, Clone, Default)]
pub struct IssueFilter {
    /// Case-insensitive substring match against title or description
    pub q: Option<String>,
    pub status: Option<IssueStatus>,
    pub priority: Option<Priority>,
    pub assignee_id: Option<Uuid>,
    pub sort: Option<IssueSort>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSort {
    /// Newest first
    CreatedAt,
    /// Orders by the stored priority string: high, low, medium.
    /// Lexical, not severity, order - kept from the original behavior.
    Priority,
}

pub struct IssueRepository {
    pool: SqlitePool,
}

impl IssueRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, issue: &Issue) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO issues (
                    id, project_id, title, description, status, priority,
                    reporter_id, assignee_id, created_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(issue.id.to_string())
        .bind(issue.project_id.to_string())
        .bind(&issue.title)
        .bind(&issue.description)
        .bind(issue.status.as_str())
        .bind(issue.priority.as_str())
        .bind(issue.reporter_id.to_string())
        .bind(issue.assignee_id.map(|id| id.to_string()))
        .bind(issue.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Issue>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, project_id, title, description, status, priority,
                       reporter_id, assignee_id, created_at
                FROM issues
                WHERE id = ?
            "#,
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| issue_from_row(&r)).transpose()
    }

    /// List a project's issues with the given filters and ordering.
    /// Without a sort the order is whatever the engine returns.
    pub async fn find_by_project(
        &self,
        project_id: Uuid,
        filter: &IssueFilter,
    ) -> DbErrorResult<Vec<Issue>> {
        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(
            r#"
                SELECT id, project_id, title, description, status, priority,
                       reporter_id, assignee_id, created_at
                FROM issues
                WHERE project_id =
            "#,
        );
        qb.push_bind(project_id.to_string());

        if let Some(ref q) = filter.q {
            let pattern = format!("%{}%", q.to_lowercase());
            qb.push(" AND (LOWER(title) LIKE ");
            qb.push_bind(pattern.clone());
            qb.push(" OR LOWER(COALESCE(description, '')) LIKE ");
            qb.push_bind(pattern);
            qb.push(")");
        }
        if let Some(status) = filter.status {
            qb.push(" AND status = ");
            qb.push_bind(status.as_str());
        }
        if let Some(priority) = filter.priority {
            qb.push(" AND priority = ");
            qb.push_bind(priority.as_str());
        }
        if let Some(assignee_id) = filter.assignee_id {
            qb.push(" AND assignee_id = ");
            qb.push_bind(assignee_id.to_string());
        }

        match filter.sort {
            Some(IssueSort::CreatedAt) => {
                qb.push(" ORDER BY created_at DESC");
            }
            Some(IssueSort::Priority) => {
                qb.push(" ORDER BY priority");
            }
            None => {}
        }

        let rows = qb.build().fetch_all(&self.pool).await?;

        rows.iter().map(issue_from_row).collect()
    }

    /// Full-row write; the caller folds a change set into the entity
    /// first. Reporter and creation time are never touched.
    pub async fn update(&self, issue: &Issue) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE issues
                SET title = ?, description = ?, status = ?, priority = ?, assignee_id = ?
                WHERE id = ?
            "#,
        )
        .bind(&issue.title)
        .bind(&issue.description)
        .bind(issue.status.as_str())
        .bind(issue.priority.as_str())
        .bind(issue.assignee_id.map(|id| id.to_string()))
        .bind(issue.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Hard delete. Comments cascade via the schema. Returns false when
    /// the row was already gone.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let id_str = id.to_string();

        let result = sqlx::query("DELETE FROM issues WHERE id = ?")
            .bind(id_str)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn issue_from_row(row: &SqliteRow) -> DbErrorResult<Issue> {
    Ok(Issue {
        id: parse_uuid(&row.try_get::<String, _>("id")?, "issues.id")?,
        project_id: parse_uuid(
            &row.try_get::<String, _>("project_id")?,
            "issues.project_id",
        )?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        status: parse_enum(&row.try_get::<String, _>("status")?, "issues.status")?,
        priority: parse_enum(&row.try_get::<String, _>("priority")?, "issues.priority")?,
        reporter_id: parse_uuid(
            &row.try_get::<String, _>("reporter_id")?,
            "issues.reporter_id",
        )?,
        assignee_id: parse_opt_uuid(row.try_get("assignee_id")?, "issues.assignee_id")?,
        created_at: parse_timestamp(row.try_get("created_at")?, "issues.created_at")?,
    })
}
