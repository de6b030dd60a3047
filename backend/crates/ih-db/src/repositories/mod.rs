pub mod comment_repository;
pub mod issue_repository;
pub mod project_member_repository;
pub mod project_repository;
pub mod user_repository;

pub(crate) mod row;
