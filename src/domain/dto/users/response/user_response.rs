use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

/// 사용자 응답 DTO
///
/// ObjectId는 24자리 16진수 문자열로 `_id` 키에 담깁니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub address: String,
    pub name: String,
    pub image: String,
    pub email: String,
    pub social: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            address,
            name,
            image,
            email,
            social,
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            address,
            name,
            image,
            email,
            social,
        }
    }
}
