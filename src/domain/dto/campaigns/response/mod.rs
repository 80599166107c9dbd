//! 캠페인 응답 DTO

pub mod campaign_response;

pub use campaign_response::CampaignResponse;
