//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 레코드 엔티티들을 정의합니다.
//!
//! ## 구성
//!
//! ```text
//! entities/
//! ├── mod.rs          ← Record 트레이트 (엔티티 공통 계약)
//! ├── users/          ← User (컬렉션: users)
//! └── campaigns/      ← Campaign (컬렉션: campaigns)
//! ```
//!
//! ## Record 트레이트
//!
//! 저장소(`RecordStore<T>`)와 서비스(`RecordService<T>`)는 엔티티 종류와 무관하게
//! 하나의 구현만 존재합니다. 엔티티별로 달라지는 부분(컬렉션 이름, 검색 필드,
//! 요청/응답 DTO, 메시지 문구)은 모두 이 트레이트의 연관 타입과 상수로 표현됩니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::{Record, users::User};
//!
//! let collection = User::COLLECTION;       // "users"
//! let search_field = User::SEARCH_FIELD;   // "address"
//! ```
//!
//! ## 불변식
//!
//! - `_id`는 저장 시점에 한 번 할당되며 이후 변경되지 않습니다.
//!   부분 업데이트 DTO(`Record::Patch`)에는 ID 필드가 존재하지 않습니다.
//! - `image`는 생성 시 필수이며, 업데이트 DTO에도 포함되지 않으므로
//!   새 이미지를 업로드하는 경우에만 교체됩니다.

use mongodb::bson::oid::ObjectId;
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

pub mod campaigns;
pub mod users;

/// 모든 레코드에 공통인 이미지 URL 필드명
pub const IMAGE_FIELD: &str = "image";

/// 저장 가능한 레코드 엔티티의 공통 계약
pub trait Record:
    Serialize + DeserializeOwned + Clone + Unpin + Send + Sync + 'static
{
    /// 생성 요청 DTO (이미지 URL 제외)
    type Draft: DeserializeOwned + Validate + Send;

    /// 부분 업데이트 DTO. 직렬화 시 전달된 필드만 남아야 합니다.
    type Patch: DeserializeOwned + Serialize + Send;

    /// API 응답 DTO
    type Response: Serialize + From<Self>;

    /// MongoDB 컬렉션 이름
    const COLLECTION: &'static str;

    /// 검색에 사용하는 필드 (문서 필드명이자 쿼리 파라미터 이름)
    const SEARCH_FIELD: &'static str;

    /// 응답 메시지에 쓰이는 엔티티 표시 이름
    const LABEL: &'static str;

    /// 단건 응답 본문에서 레코드를 담는 키
    const RESPONSE_KEY: &'static str;

    fn id(&self) -> Option<ObjectId>;

    fn set_id(&mut self, id: ObjectId);

    fn image(&self) -> &str;

    /// 검증된 생성 요청과 업로드된 이미지 URL로 새 레코드를 만듭니다.
    fn from_draft(draft: Self::Draft, image: String) -> Self;

    /// DTO 필드 이름을 요청 폼 필드 이름으로 변환합니다.
    ///
    /// 검증 오류 메시지는 클라이언트가 보낸 이름을 사용해야 합니다.
    fn form_field_name(field: &str) -> String {
        field.to_string()
    }

    /// ID 문자열로 변환
    fn id_string(&self) -> Option<String> {
        self.id().map(|id| id.to_hex())
    }
}
