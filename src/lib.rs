//! 크라우드펀딩 백엔드
//!
//! 사용자(후원자)와 캠페인 레코드를 관리하는 Rust 기반 REST API 서비스입니다.
//! 각 레코드는 Cloudinary에 업로드된 이미지 URL을 하나씩 가집니다.
//!
//! # Features
//!
//! - **사용자 관리**: 등록, 지갑 주소 검색, 수정, 삭제, 전체 조회
//! - **캠페인 관리**: 생성, 단건 조회, 수정, 삭제, 전체 조회
//! - **이미지 업로드**: 서명된 Cloudinary Upload API 호출
//! - **저장소 교체**: MongoDB 또는 인메모리 저장소
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← multipart 파싱, 응답 DTO 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← RecordService<T>, ImageUploader
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← RecordStore<T>
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← users, campaigns 컬렉션
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use crowdfund_backend::services::records::UserService;
//!
//! let service = UserService::new(store, uploader, UploadConstraints::from_env());
//! let user = service.register(&fields, Some(image)).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
