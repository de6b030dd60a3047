pub mod create_issue_request;
pub mod issue_dto;
pub mod issue_list_response;
pub mod issue_response;
pub mod issues;
pub mod list_issues_query;
pub mod update_issue_request;
