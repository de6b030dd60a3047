use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    /// Email of an already-registered user (required)
    pub email: String,

    /// Role name: "manager", "developer" or "viewer" (required)
    pub role: String,
}
