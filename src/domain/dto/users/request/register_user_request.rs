//! 사용자 등록 요청 DTO
//!
//! `POST /users/regist` multipart 폼의 텍스트 필드를 표현합니다.
//! 이미지 파트는 별도로 전달되며 이 구조체에 포함되지 않습니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::string_utils::{deserialize_trimmed_string, validate_not_blank};

/// 새 사용자 등록을 위한 요청 DTO
///
/// 누락된 필드는 빈 문자열로 채워진 뒤 검증 단계에서 거부됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterUserRequest {
    /// 지갑 주소
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(custom(function = "validate_not_blank"))]
    pub address: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(custom(function = "validate_not_blank"))]
    pub email: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(custom(function = "validate_not_blank"))]
    pub social: String,
}
