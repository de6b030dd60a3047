pub mod error;
pub mod pool;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::comment_repository::CommentRepository;
pub use repositories::issue_repository::{IssueFilter, IssueRepository, IssueSort};
pub use repositories::project_member_repository::ProjectMemberRepository;
pub use repositories::project_repository::ProjectRepository;
pub use repositories::user_repository::UserRepository;
