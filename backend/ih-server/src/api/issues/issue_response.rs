use crate::IssueDto;
use serde::Serialize;

/// Single issue response
#[derive(Debug, Serialize)]
pub struct IssueResponse {
    pub issue: IssueDto,
}
