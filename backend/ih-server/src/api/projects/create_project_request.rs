use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    /// Project name (required)
    pub name: String,

    /// Unique short key, e.g., "TP1" (required)
    pub key: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}
