//! Project entity - organizational container for issues.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project is the top-level container for issues and memberships.
/// Every project carries at least one manager membership belonging to
/// its owner, established in the same transaction that creates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    /// Unique short identifier (e.g., "TP1", "WEBAPP")
    pub key: String,
    pub description: Option<String>,
    /// The creating user
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn new(name: String, key: String, description: Option<String>, owner_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            key,
            description,
            owner_id,
            created_at: Utc::now(),
        }
    }
}
