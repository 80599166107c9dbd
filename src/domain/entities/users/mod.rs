//! Users Entity Module
//!
//! 사용자 도메인의 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//! use crate::domain::entities::Record;
//!
//! let user = User::from_draft(request, image_url);
//! assert_eq!(User::COLLECTION, "users");
//! ```

pub mod user;

pub use user::User;
