//! Campaigns Entity Module
//!
//! 모금 캠페인 엔티티를 정의하는 모듈입니다.

pub mod campaign;

pub use campaign::Campaign;
