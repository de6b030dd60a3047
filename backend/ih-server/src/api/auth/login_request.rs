use serde::Deserialize;

/// Form-encoded login body. The email travels in `username`, matching
/// the password-grant form convention the original API exposed.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
