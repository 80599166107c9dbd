//! # Campaign Data Transfer Objects Module
//!
//! | 엔드포인트 | 요청 DTO | 응답 DTO |
//! |------------|----------|----------|
//! | `POST /campaigns/createCampaign` | `CreateCampaignRequest` + 이미지 | `{ message, campaign: CampaignResponse }` |
//! | `GET /campaigns/getCampaign/{id}` | - | `CampaignResponse` |
//! | `PUT /campaigns/updateCampaign/{id}` | `UpdateCampaignRequest` + 선택 이미지 | `{ message, campaign: CampaignResponse }` |
//! | `GET /campaigns/getAllCampaign` | - | `[CampaignResponse]` |

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
