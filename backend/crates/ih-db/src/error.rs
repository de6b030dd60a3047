use ih_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Uniqueness violation: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Row mapping failed: {message} {location}")]
    Mapping {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    /// Integrity violations are translated here, at the repository
    /// boundary, so raw storage errors never leak to callers.
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source {
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::Conflict {
                message: db.message().to_string(),
                location,
            },
            source => Self::Sqlx { source, location },
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
