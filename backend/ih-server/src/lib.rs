pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    auth::{
        auth::{login, me, signup},
        login_request::LoginRequest,
        signup_request::SignupRequest,
        token_response::TokenResponse,
        user_dto::UserDto,
    },
    comments::{
        comment_dto::CommentDto,
        comment_list_response::CommentListResponse,
        comments::{create_comment, list_comments},
        create_comment_request::CreateCommentRequest,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
    issues::{
        create_issue_request::CreateIssueRequest,
        issue_dto::IssueDto,
        issue_list_response::IssueListResponse,
        issue_response::IssueResponse,
        issues::{create_issue, delete_issue, get_issue, list_issues, update_issue},
        list_issues_query::ListIssuesQuery,
        update_issue_request::UpdateIssueRequest,
    },
    members::{
        add_member_request::AddMemberRequest,
        member_dto::MemberDto,
        member_list_response::MemberListResponse,
        members::{add_member, list_members},
    },
    projects::{
        create_project_request::CreateProjectRequest,
        project_dto::ProjectDto,
        project_list_response::ProjectListResponse,
        project_response::ProjectResponse,
        projects::{create_project, list_projects},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
