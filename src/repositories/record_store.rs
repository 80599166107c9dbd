//! # Record Store 계약
//!
//! 엔티티 종류와 무관한 영속성 추상화입니다. `RecordService<T>`는 이 트레이트에만
//! 의존하므로 MongoDB 구현과 인메모리 구현을 자유롭게 교체할 수 있습니다.
//!
//! ## 연산별 실패 조건
//!
//! | 연산 | 실패 |
//! |------|------|
//! | `insert` | `DatabaseError` |
//! | `get_by_id` | `InvalidIdentifier`, `NotFound` |
//! | `update` | `InvalidIdentifier`, `NotFound` |
//! | `delete` | `InvalidIdentifier`, `NotFound` |
//! | `find_all` | `DatabaseError` |
//! | `find_by_field` | `DatabaseError` (결과 없음은 빈 벡터) |
//!
//! 단일 연산 단위의 원자성 외에 유일성, 참조 무결성, 트랜잭션은 보장하지 않습니다.

use async_trait::async_trait;
use mongodb::bson::Document;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Record;

#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    /// 새 식별자를 할당하여 레코드를 저장하고, 저장된 레코드를 반환합니다.
    async fn insert(&self, record: T) -> AppResult<T>;

    async fn get_by_id(&self, id: &str) -> AppResult<T>;

    /// `changes`에 포함된 필드만 덮어쓰고, 갱신 후의 레코드를 반환합니다.
    async fn update(&self, id: &str, changes: Document) -> AppResult<T>;

    async fn delete(&self, id: &str) -> AppResult<()>;

    /// 모든 레코드 (순서 보장 없음)
    async fn find_all(&self) -> AppResult<Vec<T>>;

    /// `field` 값이 정규식 `pattern`과 대소문자 구분 없이 일치하는 레코드
    async fn find_by_field(&self, field: &str, pattern: &str) -> AppResult<Vec<T>>;
}

/// 엔티티별 "찾을 수 없음" 에러
pub fn not_found<T: Record>() -> AppError {
    AppError::NotFound(format!("{}을(를) 찾을 수 없습니다", T::LABEL))
}
