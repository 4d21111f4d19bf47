//! 사용자 요청 DTO

pub mod user_request;

pub use user_request::UserRequest;
