pub mod comment;
pub mod issue;
pub mod issue_changes;
pub mod issue_status;
pub mod priority;
pub mod project;
pub mod project_member;
pub mod role;
pub mod user;
