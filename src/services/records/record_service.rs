//! # 레코드 서비스 구현
//!
//! 사용자와 캠페인의 등록, 검색, 수정, 삭제, 목록 조회를 담당하는 비즈니스 로직입니다.
//! 두 엔티티의 흐름이 동일하므로 `Record` 트레이트 위에 하나의 제네릭 구현만 둡니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                  RecordService<T>                    │
//! │                                                      │
//! │  register ─┬─ 이미지 확인 → 필드 검증 → 업로드 → insert │
//! │  modify   ─┼─ ID 검증 → (업로드) → $set 병합 → update  │
//! │  search   ─┼─ 검색어 확인 → 이스케이프 → find_by_field │
//! │  get/remove┴─ ID 검증 → get_by_id / delete            │
//! └──────────────────────────────────────────────────────┘
//!            │                              │
//!            ▼                              ▼
//!   Arc<dyn RecordStore<T>>        Arc<dyn ImageUploader>
//!   (MongoDB | InMemory)           (Cloudinary | Stub)
//! ```
//!
//! ## 검증 순서
//!
//! 모든 입력 검증은 업로드와 저장소 호출보다 먼저 수행됩니다. 따라서 400 응답으로
//! 끝나는 요청은 외부 시스템에 어떤 흔적도 남기지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let service = UserService::new(store, uploader, UploadConstraints::from_env());
//!
//! let user = service.register(&form.fields, form.image).await?;
//! let found = service.search(Some("0xabc")).await?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};
use mongodb::bson::{self, Bson};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::{
    core::errors::{AppError, AppResult, ErrorContext},
    domain::entities::{campaigns::Campaign, users::User, Record, IMAGE_FIELD},
    repositories::RecordStore,
    services::uploads::{ImageUpload, ImageUploader, UploadConstraints, UploadError},
    utils::{object_id::parse_object_id, string_utils::escape_search_term},
};

/// 엔티티에 무관한 레코드 비즈니스 로직
pub struct RecordService<T: Record> {
    store: Arc<dyn RecordStore<T>>,
    uploader: Arc<dyn ImageUploader>,
    constraints: UploadConstraints,
}

pub type UserService = RecordService<User>;
pub type CampaignService = RecordService<Campaign>;

impl<T: Record> RecordService<T> {
    pub fn new(
        store: Arc<dyn RecordStore<T>>,
        uploader: Arc<dyn ImageUploader>,
        constraints: UploadConstraints,
    ) -> Self {
        Self {
            store,
            uploader,
            constraints,
        }
    }

    /// 이미지 업로드 제약 조건 (multipart 파서의 크기 제한에도 사용)
    pub fn constraints(&self) -> &UploadConstraints {
        &self.constraints
    }

    /// 새 레코드 등록
    ///
    /// # 처리 과정
    ///
    /// 1. 이미지가 없으면 `MissingImage` (업로드, 저장 모두 수행하지 않음)
    /// 2. 텍스트 필드를 `T::Draft`로 변환 후 검증, 실패 시 `MissingField`
    /// 3. 이미지 업로드 후 반환된 URL을 `image`로 하여 저장
    ///
    /// # 반환값
    ///
    /// * `Ok(T)` - 새 식별자가 할당된 레코드
    /// * `Err(AppError::UploadError)` - 업로드 실패 (저장하지 않음)
    /// * `Err(AppError::DatabaseError)` - 저장 실패
    pub async fn register(
        &self,
        fields: &HashMap<String, String>,
        image: Option<ImageUpload>,
    ) -> AppResult<T> {
        let start_time = Instant::now();

        let image = image.ok_or(AppError::MissingImage)?;

        let draft: T::Draft = form_to_dto(fields)?;
        draft.validate().map_err(missing_fields::<T>)?;

        let upload_start = Instant::now();
        let image_url = self.uploader.store(image, &self.constraints).await?;
        info!("Image upload took: {:?}", upload_start.elapsed());

        let record = T::from_draft(draft, image_url);
        ensure_image_url(record.image())?;

        let record = self.store.insert(record).await?;

        info!(
            "Total {} registration took: {:?} (id={})",
            T::LABEL,
            start_time.elapsed(),
            record.id_string().unwrap_or_default()
        );

        Ok(record)
    }

    /// 검색 필드(`T::SEARCH_FIELD`) 부분 일치 검색
    ///
    /// 검색어는 리터럴로 취급되며 대소문자를 구분하지 않습니다.
    /// 결과가 없으면 빈 벡터를 반환하고, 404 변환은 핸들러가 담당합니다.
    pub async fn search(&self, term: Option<&str>) -> AppResult<Vec<T>> {
        let term = term
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::MissingQuery(T::SEARCH_FIELD.to_string()))?;

        let pattern = escape_search_term(term);
        let records = self.store.find_by_field(T::SEARCH_FIELD, &pattern).await?;

        debug!("{} 검색 '{}': {}건", T::LABEL, term, records.len());
        Ok(records)
    }

    /// 레코드 부분 수정
    ///
    /// 전달된(공백이 아닌) 필드만 덮어쓰고, 새 이미지가 있을 때만 업로드하여
    /// `image`를 교체합니다. 변경 사항이 없으면 현재 레코드를 그대로 반환합니다.
    pub async fn modify(
        &self,
        id: &str,
        fields: &HashMap<String, String>,
        image: Option<ImageUpload>,
    ) -> AppResult<T> {
        let object_id = parse_object_id(id)?.to_hex();

        let patch: T::Patch = form_to_dto(fields)?;
        let mut changes = bson::to_document(&patch).context("수정 문서 변환 실패")?;

        if let Some(image) = image {
            let upload_start = Instant::now();
            let image_url = self.uploader.store(image, &self.constraints).await?;
            info!("Image upload took: {:?}", upload_start.elapsed());

            ensure_image_url(&image_url)?;
            changes.insert(IMAGE_FIELD, Bson::String(image_url));
        }

        if changes.is_empty() {
            debug!("{} 수정 요청에 변경 사항 없음: {}", T::LABEL, object_id);
            return self.store.get_by_id(&object_id).await;
        }

        let updated = self.store.update(&object_id, changes).await?;
        info!("{} 수정 완료: {}", T::LABEL, object_id);

        Ok(updated)
    }

    pub async fn remove(&self, id: &str) -> AppResult<()> {
        let object_id = parse_object_id(id)?.to_hex();

        self.store.delete(&object_id).await?;
        info!("{} 삭제 완료: {}", T::LABEL, object_id);

        Ok(())
    }

    pub async fn list(&self) -> AppResult<Vec<T>> {
        self.store.find_all().await
    }

    /// ID로 단건 조회
    pub async fn get(&self, id: &str) -> AppResult<T> {
        let object_id = parse_object_id(id)?.to_hex();
        self.store.get_by_id(&object_id).await
    }
}

/// multipart 텍스트 필드를 요청 DTO로 변환
///
/// DTO에 없는 키는 무시됩니다.
fn form_to_dto<D: DeserializeOwned>(fields: &HashMap<String, String>) -> AppResult<D> {
    let value = serde_json::to_value(fields).context("폼 필드 변환 실패")?;

    serde_json::from_value(value)
        .map_err(|e| AppError::ValidationError(format!("잘못된 폼 필드: {}", e)))
}

/// 레코드의 `image`는 비어 있을 수 없습니다.
fn ensure_image_url(url: &str) -> AppResult<()> {
    if url.trim().is_empty() {
        return Err(UploadError::Provider("이미지 저장소가 빈 URL을 반환했습니다".to_string()).into());
    }
    Ok(())
}

/// 검증 실패 필드를 폼 필드 이름순으로 모아 `MissingField`로 변환
fn missing_fields<T: Record>(errors: ValidationErrors) -> AppError {
    let mut names: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|name| T::form_field_name(name))
        .collect();
    names.sort();

    AppError::MissingField(names.join(", "))
}
