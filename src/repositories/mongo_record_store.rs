//! # MongoDB 레코드 저장소
//!
//! `RecordStore<T>`의 MongoDB 구현입니다. 엔티티마다 하나의 컬렉션
//! (`T::COLLECTION`)을 사용합니다.
//!
//! ## 연산 매핑
//!
//! | 연산 | MongoDB |
//! |------|---------|
//! | `insert` | `insert_one` |
//! | `get_by_id` | `find_one({ _id })` |
//! | `update` | `find_one_and_update({ _id }, { $set })`, `ReturnDocument::After` |
//! | `delete` | `delete_one({ _id })` |
//! | `find_all` | `find({})` |
//! | `find_by_field` | `find({ field: { $regex, $options: "i" } })` |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::repositories::MongoRecordStore;
//! use crate::domain::entities::users::User;
//!
//! let store = MongoRecordStore::<User>::new(&database);
//! store.create_indexes().await?;
//! let user = store.get_by_id("507f1f77bcf86cd799439011").await?;
//! ```

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, info};
use mongodb::{
    bson::{doc, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::Record,
    repositories::record_store::{not_found, RecordStore},
    utils::object_id::parse_object_id,
};

pub struct MongoRecordStore<T: Record> {
    collection: Collection<T>,
}

impl<T: Record> MongoRecordStore<T> {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<T>(T::COLLECTION),
        }
    }

    /// 검색 필드 인덱스 생성
    ///
    /// `T::SEARCH_FIELD`에 일반(비유일) 오름차순 인덱스를 만듭니다.
    /// 주소 값은 중복될 수 있으므로 유일 제약을 걸지 않습니다.
    /// 애플리케이션 초기화 시점에 한 번 호출합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let mut keys = Document::new();
        keys.insert(T::SEARCH_FIELD, 1);

        let index = IndexModel::builder()
            .keys(keys)
            .options(IndexOptions::builder()
                .name(format!("{}_asc", T::SEARCH_FIELD))
                .build())
            .build();

        self.collection
            .create_index(index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("📇 {} 컬렉션 인덱스 생성: {}", T::COLLECTION, T::SEARCH_FIELD);
        Ok(())
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for MongoRecordStore<T> {
    async fn insert(&self, mut record: T) -> AppResult<T> {
        let result = self.collection
            .insert_one(&record)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let id = result.inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::DatabaseError("삽입된 문서의 _id가 ObjectId가 아닙니다".to_string()))?;

        record.set_id(id);
        debug!("{} 문서 삽입: {}", T::COLLECTION, id.to_hex());

        Ok(record)
    }

    async fn get_by_id(&self, id: &str) -> AppResult<T> {
        let object_id = parse_object_id(id)?;

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .ok_or_else(not_found::<T>)
    }

    async fn update(&self, id: &str, changes: Document) -> AppResult<T> {
        let object_id = parse_object_id(id)?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "_id": object_id }, set_update(changes))
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .ok_or_else(not_found::<T>)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let object_id = parse_object_id(id)?;

        let result = self.collection
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count == 0 {
            return Err(not_found::<T>());
        }

        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<T>> {
        self.collection
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect::<Vec<T>>()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_field(&self, field: &str, pattern: &str) -> AppResult<Vec<T>> {
        self.collection
            .find(search_filter(field, pattern))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect::<Vec<T>>()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

/// 대소문자를 구분하지 않는 부분 일치 필터
///
/// `pattern`은 호출자가 이미 이스케이프한 정규식입니다.
fn search_filter(field: &str, pattern: &str) -> Document {
    let mut filter = Document::new();
    filter.insert(field, doc! { "$regex": pattern, "$options": "i" });
    filter
}

/// 전달된 키만 덮어쓰는 `$set` 업데이트 문서
fn set_update(changes: Document) -> Document {
    doc! { "$set": changes }
}
