use crate::IssueDto;
use serde::Serialize;

/// List of issues response
#[derive(Debug, Serialize)]
pub struct IssueListResponse {
    pub issues: Vec<IssueDto>,
}
