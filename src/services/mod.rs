//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 싱글톤이 아닌 일반 값으로 생성되어 `web::Data`로 핸들러에 주입됩니다.
//! 저장소와 업로더는 트레이트 객체로 전달되므로 테스트에서 교체할 수 있습니다.
//!
//! # Features
//!
//! - 사용자/캠페인 레코드 생명주기 관리 (등록, 검색, 수정, 삭제, 목록)
//! - Cloudinary 이미지 업로드
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{records::UserService, uploads::CloudinaryUploader};
//!
//! let uploader = Arc::new(CloudinaryUploader::from_env()?);
//! let user_service = UserService::new(user_store, uploader, UploadConstraints::from_env());
//! ```

pub mod records;
pub mod uploads;
