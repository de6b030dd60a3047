use crate::CommentDto;
use serde::Serialize;

/// List of comments response
#[derive(Debug, Serialize)]
pub struct CommentListResponse {
    pub comments: Vec<CommentDto>,
}
