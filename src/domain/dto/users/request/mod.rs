//! 사용자 요청 DTO

pub mod register_user_request;
pub mod update_user_request;

pub use register_user_request::RegisterUserRequest;
pub use update_user_request::UpdateUserRequest;
