pub mod comment_dto;
pub mod comment_list_response;
pub mod comments;
pub mod create_comment_request;
