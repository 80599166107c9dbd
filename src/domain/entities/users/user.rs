//! User Entity Implementation
//!
//! 크라우드펀딩 참여자를 표현하는 사용자 엔티티입니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::dto::users::{RegisterUserRequest, UpdateUserRequest, UserResponse};
use crate::domain::entities::Record;

/// 사용자 엔티티 (컬렉션: `users`)
///
/// `address`는 외부 체인의 지갑 주소이며 유일성이 보장되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// 지갑 주소 (검색 키)
    pub address: String,

    pub name: String,

    /// 프로필 이미지 URL
    pub image: String,

    pub email: String,

    /// 소셜 계정 핸들
    pub social: String,
}

impl Record for User {
    type Draft = RegisterUserRequest;
    type Patch = UpdateUserRequest;
    type Response = UserResponse;

    const COLLECTION: &'static str = "users";
    const SEARCH_FIELD: &'static str = "address";
    const LABEL: &'static str = "사용자";
    const RESPONSE_KEY: &'static str = "user";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    fn image(&self) -> &str {
        &self.image
    }

    fn from_draft(draft: RegisterUserRequest, image: String) -> Self {
        let RegisterUserRequest {
            address,
            name,
            email,
            social,
        } = draft;

        Self {
            id: None,
            address,
            name,
            image,
            email,
            social,
        }
    }
}
