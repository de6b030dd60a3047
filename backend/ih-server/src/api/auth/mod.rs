pub mod auth;
pub mod login_request;
pub mod signup_request;
pub mod token_response;
pub mod user_dto;
