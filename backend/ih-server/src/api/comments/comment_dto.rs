use ih_core::Comment;

use serde::Serialize;

/// Comment DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct CommentDto {
    pub id: String,
    pub issue_id: String,
    pub author_id: String,
    pub body: String,
    pub created_at: i64,
}

impl From<Comment> for CommentDto {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id.to_string(),
            issue_id: c.issue_id.to_string(),
            author_id: c.author_id.to_string(),
            body: c.body,
            created_at: c.created_at.timestamp(),
        }
    }
}
