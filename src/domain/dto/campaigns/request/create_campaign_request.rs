//! 캠페인 생성 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::string_utils::{deserialize_trimmed_string, validate_not_blank};

/// `POST /campaigns/createCampaign` multipart 폼의 텍스트 필드
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignRequest {
    /// 컨트랙트 주소
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(custom(function = "validate_not_blank"))]
    pub contract_address: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(custom(function = "validate_not_blank"))]
    pub type_animal: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,
}
