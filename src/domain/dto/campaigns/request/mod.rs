//! 캠페인 요청 DTO

pub mod create_campaign_request;
pub mod update_campaign_request;

pub use create_campaign_request::CreateCampaignRequest;
pub use update_campaign_request::UpdateCampaignRequest;
