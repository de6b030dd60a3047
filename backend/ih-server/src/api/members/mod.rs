pub mod add_member_request;
pub mod member_dto;
pub mod member_list_response;
pub mod members;
