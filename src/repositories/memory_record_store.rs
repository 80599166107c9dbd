//! # 인메모리 레코드 저장소
//!
//! `RecordStore<T>`를 프로세스 메모리에 구현합니다.
//! 테스트 더블로 쓰이며, `STORE_BACKEND=memory`로 MongoDB 없이 서버를 띄울 때도 사용합니다.
//!
//! 부분 업데이트는 레코드를 BSON 문서로 바꾼 뒤 변경 필드를 덮어쓰고 다시
//! 역직렬화하는 방식으로 처리하여, MongoDB `$set`과 같은 결과를 냅니다.
//! 잠금은 동기 구간에서만 잡으며 `.await` 너머로 유지하지 않습니다.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use mongodb::bson::{self, oid::ObjectId, Document};
use regex::RegexBuilder;

use crate::{
    core::errors::{AppError, AppResult, ErrorContext},
    domain::entities::Record,
    repositories::record_store::{not_found, RecordStore},
    utils::object_id::parse_object_id,
};

pub struct InMemoryRecordStore<T: Record> {
    records: RwLock<BTreeMap<ObjectId, T>>,
}

impl<T: Record> Default for InMemoryRecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> InMemoryRecordStore<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }

    /// 저장된 레코드 수
    pub fn len(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, BTreeMap<ObjectId, T>>> {
        self.records
            .read()
            .map_err(|_| AppError::InternalError(format!("{} 저장소 잠금이 손상되었습니다", T::COLLECTION)))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, BTreeMap<ObjectId, T>>> {
        self.records
            .write()
            .map_err(|_| AppError::InternalError(format!("{} 저장소 잠금이 손상되었습니다", T::COLLECTION)))
    }

    fn insert_sync(&self, mut record: T) -> AppResult<T> {
        let id = ObjectId::new();
        record.set_id(id);
        self.write()?.insert(id, record.clone());
        Ok(record)
    }

    fn update_sync(&self, id: &ObjectId, changes: Document) -> AppResult<T> {
        let mut records = self.write()?;
        let current = records.get(id).ok_or_else(not_found::<T>)?;

        let mut document = bson::to_document(current).context("레코드 문서 변환 실패")?;
        for (key, value) in changes {
            // 식별자는 불변
            if key == "_id" {
                continue;
            }
            document.insert(key, value);
        }

        let updated: T = bson::from_document(document).context("갱신된 레코드 복원 실패")?;
        records.insert(*id, updated.clone());

        Ok(updated)
    }

    fn find_by_field_sync(&self, field: &str, pattern: &str) -> AppResult<Vec<T>> {
        let matcher = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| AppError::DatabaseError(format!("잘못된 검색 패턴: {}", e)))?;

        let records = self.read()?;
        let mut matches = Vec::new();

        for record in records.values() {
            let document = bson::to_document(record).context("레코드 문서 변환 실패")?;
            if let Ok(value) = document.get_str(field) {
                if matcher.is_match(value) {
                    matches.push(record.clone());
                }
            }
        }

        Ok(matches)
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for InMemoryRecordStore<T> {
    async fn insert(&self, record: T) -> AppResult<T> {
        self.insert_sync(record)
    }

    async fn get_by_id(&self, id: &str) -> AppResult<T> {
        let object_id = parse_object_id(id)?;
        self.read()?.get(&object_id).cloned().ok_or_else(not_found::<T>)
    }

    async fn update(&self, id: &str, changes: Document) -> AppResult<T> {
        let object_id = parse_object_id(id)?;
        self.update_sync(&object_id, changes)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let object_id = parse_object_id(id)?;
        self.write()?
            .remove(&object_id)
            .map(|_| ())
            .ok_or_else(not_found::<T>)
    }

    async fn find_all(&self) -> AppResult<Vec<T>> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn find_by_field(&self, field: &str, pattern: &str) -> AppResult<Vec<T>> {
        self.find_by_field_sync(field, pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::User;
    use mongodb::bson::doc;

    fn user(address: &str, name: &str) -> User {
        User {
            id: None,
            address: address.to_string(),
            name: name.to_string(),
            image: format!("https://img/{}.jpg", name),
            email: format!("{}@x.com", name),
            social: format!("@{}", name),
        }
    }

    #[actix_web::test]
    async fn test_insert_assigns_distinct_ids() {
        let store = InMemoryRecordStore::<User>::new();

        let first = store.insert(user("0x1", "a")).await.unwrap();
        let second = store.insert(user("0x2", "b")).await.unwrap();

        assert!(first.id.is_some());
        assert_ne!(first.id, second.id);
        assert_eq!(store.len().unwrap(), 2);
    }

    #[actix_web::test]
    async fn test_get_by_id_distinguishes_malformed_and_missing() {
        let store = InMemoryRecordStore::<User>::new();

        assert!(matches!(store.get_by_id("abc").await, Err(AppError::InvalidIdentifier)));
        assert!(matches!(
            store.get_by_id(&ObjectId::new().to_hex()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_update_applies_only_supplied_fields() {
        let store = InMemoryRecordStore::<User>::new();
        let created = store.insert(user("0x1", "a")).await.unwrap();
        let id = created.id_string().unwrap();

        let updated = store
            .update(&id, doc! { "name": "renamed", "_id": ObjectId::new() })
            .await
            .unwrap();

        assert_eq!(updated.name, "renamed");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.address, created.address);
        assert_eq!(updated.image, created.image);
        assert_eq!(store.get_by_id(&id).await.unwrap(), updated);
    }

    #[actix_web::test]
    async fn test_update_unknown_id_is_not_found() {
        let store = InMemoryRecordStore::<User>::new();

        let result = store.update(&ObjectId::new().to_hex(), doc! { "name": "x" }).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_delete_then_get_is_not_found() {
        let store = InMemoryRecordStore::<User>::new();
        let id = store.insert(user("0x1", "a")).await.unwrap().id_string().unwrap();

        store.delete(&id).await.unwrap();

        assert!(matches!(store.get_by_id(&id).await, Err(AppError::NotFound(_))));
        assert!(matches!(store.delete(&id).await, Err(AppError::NotFound(_))));
        assert!(store.is_empty().unwrap());
    }

    #[actix_web::test]
    async fn test_find_by_field_is_case_insensitive() {
        let store = InMemoryRecordStore::<User>::new();
        store.insert(user("0xABC123", "a")).await.unwrap();
        store.insert(user("0xdef456", "b")).await.unwrap();

        let found = store.find_by_field("address", "abc").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].address, "0xABC123");

        let none = store.find_by_field("address", "zzz").await.unwrap();
        assert!(none.is_empty());
    }

    #[actix_web::test]
    async fn test_find_all_returns_every_record() {
        let store = InMemoryRecordStore::<User>::new();
        store.insert(user("0x1", "a")).await.unwrap();
        store.insert(user("0x1", "b")).await.unwrap();

        assert_eq!(store.find_all().await.unwrap().len(), 2);
    }
}
