//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//! 문자열 처리, 식별자 검증, 터미널 출력 등의 기능을 포함합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 검색어 이스케이프
//! - [`object_id`] - ObjectId 형식 검증
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::object_id::parse_object_id;
//! use crate::utils::string_utils::escape_search_term;
//!
//! let id = parse_object_id("507f1f77bcf86cd799439011")?;
//! let pattern = escape_search_term("0x(1)"); // 0x\(1\)
//! ```

pub mod display_terminal;
pub mod object_id;
pub mod string_utils;
