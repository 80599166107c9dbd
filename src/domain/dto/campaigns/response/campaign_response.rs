use serde::{Deserialize, Serialize};

use crate::domain::entities::campaigns::Campaign;

/// 캠페인 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub contract_address: String,
    pub image: String,
    pub name: String,
    pub type_animal: String,
    pub description: String,
}

impl From<Campaign> for CampaignResponse {
    fn from(campaign: Campaign) -> Self {
        let Campaign {
            id,
            contract_address,
            image,
            name,
            type_animal,
            description,
        } = campaign;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            contract_address,
            image,
            name,
            type_animal,
            description,
        }
    }
}
