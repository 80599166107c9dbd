//! 레코드 비즈니스 로직

pub mod record_service;

pub use record_service::{CampaignService, RecordService, UserService};
