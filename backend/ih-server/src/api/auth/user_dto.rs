use ih_core::User;

use serde::Serialize;

/// User DTO for JSON serialization. The credential hash stays behind;
/// `User` itself is deliberately not serializable.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: i64,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            name: u.name,
            email: u.email,
            created_at: u.created_at.timestamp(),
        }
    }
}
