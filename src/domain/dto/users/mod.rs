//! # User Data Transfer Objects Module
//!
//! 사용자 API의 요청/응답 데이터 구조를 정의합니다.
//!
//! | 엔드포인트 | 요청 DTO | 응답 DTO |
//! |------------|----------|----------|
//! | `POST /users/regist` | `RegisterUserRequest` + 이미지 | `{ message, user: UserResponse }` |
//! | `PUT /users/update/{id}` | `UpdateUserRequest` + 선택 이미지 | `{ message, user: UserResponse }` |
//! | `GET /users/searchByAddress` | `?address=` | `[UserResponse]` |
//! | `GET /users/allData` | - | `[UserResponse]` |

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
