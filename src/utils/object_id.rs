//! # 식별자 검증
//!
//! 저장소를 호출하기 전에 ID의 형식을 검사하여
//! "잘못된 ID"(400)와 "존재하지 않는 레코드"(404)를 구분합니다.

use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppError;

/// 24자리 16진수 문자열을 `ObjectId`로 변환합니다.
///
/// 형식이 맞지 않으면 `AppError::InvalidIdentifier`를 반환합니다.
pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id.trim()).map_err(|_| AppError::InvalidIdentifier)
}
