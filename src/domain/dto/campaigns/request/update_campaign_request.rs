//! 캠페인 부분 업데이트 요청 DTO

use serde::{Deserialize, Serialize};

use crate::utils::string_utils::deserialize_optional_string;

/// `PUT /campaigns/updateCampaign/{id}` 요청 DTO
///
/// 직렬화된 키는 저장 문서와 같은 camelCase입니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCampaignRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string", skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string", skip_serializing_if = "Option::is_none")]
    pub type_animal: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
