//! Campaign Entity Implementation

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::dto::campaigns::{CampaignResponse, CreateCampaignRequest, UpdateCampaignRequest};
use crate::domain::entities::Record;
use crate::utils::string_utils::to_camel_case;

/// 캠페인 엔티티 (컬렉션: `campaigns`)
///
/// 문서 필드는 camelCase(`contractAddress`, `typeAnimal`)로 저장됩니다.
/// `contract_address`는 외부 체인의 컨트랙트 주소로, 이 서비스에서는 불투명한 값입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub contract_address: String,

    /// 대표 이미지 URL
    pub image: String,

    pub name: String,

    /// 후원 대상 동물 분류
    pub type_animal: String,

    pub description: String,
}

impl Record for Campaign {
    type Draft = CreateCampaignRequest;
    type Patch = UpdateCampaignRequest;
    type Response = CampaignResponse;

    const COLLECTION: &'static str = "campaigns";
    const SEARCH_FIELD: &'static str = "contractAddress";
    const LABEL: &'static str = "캠페인";
    const RESPONSE_KEY: &'static str = "campaign";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    fn image(&self) -> &str {
        &self.image
    }

    fn form_field_name(field: &str) -> String {
        to_camel_case(field)
    }

    fn from_draft(draft: CreateCampaignRequest, image: String) -> Self {
        let CreateCampaignRequest {
            contract_address,
            name,
            type_animal,
            description,
        } = draft;

        Self {
            id: None,
            contract_address,
            image,
            name,
            type_animal,
            description,
        }
    }
}
