//! # Data Transfer Objects (DTO) Module
//!
//! 클라이언트와 서버 간 데이터 교환을 위한 요청/응답 구조체를 정의합니다.
//!
//! ```text
//! dto/
//! ├── users/
//! │   ├── request/     # RegisterUserRequest, UpdateUserRequest
//! │   └── response/    # UserResponse
//! └── campaigns/
//!     ├── request/     # CreateCampaignRequest, UpdateCampaignRequest
//!     └── response/    # CampaignResponse
//! ```
//!
//! 생성 요청 DTO는 모든 필드가 필수이며 `validator`로 공백 여부를 검사합니다.
//! 업데이트 DTO는 모든 필드가 `Option`이고, 빈 값은 "전달되지 않음"으로 취급되어
//! 직렬화 시 제외됩니다. 그 결과가 그대로 MongoDB `$set` 문서가 됩니다.

pub mod campaigns;
pub mod users;
