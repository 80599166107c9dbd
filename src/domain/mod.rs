//! # Domain Module
//!
//! 크라우드펀딩 백엔드의 도메인 계층입니다.
//!
//! ```text
//! domain/
//! ├── entities/   ← MongoDB 문서와 매핑되는 레코드 (User, Campaign) + Record 트레이트
//! └── dto/        ← 요청/응답 데이터 전송 객체
//! ```

pub mod dto;
pub mod entities;

pub use entities::*;
