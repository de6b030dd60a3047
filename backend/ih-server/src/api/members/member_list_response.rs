use crate::MemberDto;
use serde::Serialize;

/// List of memberships response
#[derive(Debug, Serialize)]
pub struct MemberListResponse {
    pub members: Vec<MemberDto>,
}
