use crate::Result as DbErrorResult;
use crate::repositories::row::{parse_timestamp, parse_uuid};

use ih_core::Comment;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct CommentRepository {
    pool: SqlitePool,
}

impl CommentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, comment: &Comment) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO comments (id, issue_id, author_id, body, created_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(comment.id.to_string())
        .bind(comment.issue_id.to_string())
        .bind(comment.author_id.to_string())
        .bind(&comment.body)
        .bind(comment.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Chronological order, oldest first.
    pub async fn find_by_issue(&self, issue_id: Uuid) -> DbErrorResult<Vec<Comment>> {
        let issue_id_str = issue_id.to_string();

        let rows = sqlx::query(
            r#"
                SELECT id, issue_id, author_id, body, created_at
                FROM comments
                WHERE issue_id = ?
                ORDER BY created_at ASC
            "#,
        )
        .bind(issue_id_str)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(comment_from_row).collect()
    }
}

fn comment_from_row(row: &SqliteRow) -> DbErrorResult<Comment> {
    Ok(Comment {
        id: parse_uuid(&row.try_get::<String, _>("id")?, "comments.id")?,
        issue_id: parse_uuid(&row.try_get::<String, _>("issue_id")?, "comments.issue_id")?,
        author_id: parse_uuid(
            &row.try_get::<String, _>("author_id")?,
            "comments.author_id",
        )?,
        body: row.try_get("body")?,
        created_at: parse_timestamp(row.try_get("created_at")?, "comments.created_at")?,
    })
}
