use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    /// Display name (required)
    pub name: String,

    /// Unique login email (required)
    pub email: String,

    /// Plaintext password; hashed immediately, never stored or echoed
    pub password: String,
}
