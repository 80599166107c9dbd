//! 사용자 부분 업데이트 요청 DTO

use serde::{Deserialize, Serialize};

use crate::utils::string_utils::deserialize_optional_string;

/// `PUT /users/update/{id}` 요청 DTO
///
/// 전달된 필드만 직렬화되어 `$set` 문서가 됩니다.
/// `image`와 `_id`는 의도적으로 존재하지 않습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string", skip_serializing_if = "Option::is_none")]
    pub social: Option<String>,
}
