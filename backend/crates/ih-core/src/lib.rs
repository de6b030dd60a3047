pub mod error;
pub mod models;
pub mod policy;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::comment::Comment;
pub use models::issue::Issue;
pub use models::issue_changes::IssueChanges;
pub use models::issue_status::IssueStatus;
pub use models::priority::Priority;
pub use models::project::Project;
pub use models::project_member::ProjectMember;
pub use models::role::Role;
pub use models::user::User;
