use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    /// Comment text (required)
    pub body: String,
}
