pub mod auth;
pub mod comments;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod issues;
pub mod members;
pub mod projects;
