use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered user. Immutable after signup except for credential
/// rotation, which is not implemented.
///
/// Deliberately not `Serialize`: the credential hash must never reach a
/// response body. The server layer maps users to a DTO without it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Unique across all users
    pub email: String,
    /// One-way argon2 hash, never the plaintext
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
