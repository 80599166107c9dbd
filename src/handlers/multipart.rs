//! # multipart/form-data 요청 파서
//!
//! 레코드 생성/수정 요청은 텍스트 필드와 하나의 이미지 파트(`image`)로 구성됩니다.
//!
//! ```text
//! --boundary
//! Content-Disposition: form-data; name="address"
//!
//! 0x1
//! --boundary
//! Content-Disposition: form-data; name="image"; filename="avatar.jpg"
//! Content-Type: image/jpeg
//!
//! <binary>
//! --boundary--
//! ```

use std::collections::HashMap;

use actix_multipart::{Field, Multipart};
use futures_util::TryStreamExt;
use log::debug;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::IMAGE_FIELD;
use crate::services::uploads::{ImageUpload, UploadError};

/// 텍스트 파트 하나의 최대 크기
pub const MAX_TEXT_FIELD_BYTES: usize = 64 * 1024;

/// 파싱된 레코드 폼
#[derive(Debug, Default)]
pub struct RecordForm {
    pub fields: HashMap<String, String>,
    /// 파일명이 있고 내용이 비어 있지 않은 이미지 파트
    pub image: Option<ImageUpload>,
}

/// multipart 스트림 전체를 읽어 `RecordForm`으로 변환합니다.
///
/// 같은 이름의 텍스트 필드가 여러 번 오면 마지막 값을 사용합니다.
/// 이름이 없는 파트는 무시합니다.
///
/// 파트 크기는 읽는 도중에 검사합니다. 이미지 파트가 `max_image_bytes`를 넘으면
/// `UploadError::TooLarge`, 텍스트 파트가 [`MAX_TEXT_FIELD_BYTES`]를 넘으면
/// `ValidationError`로 즉시 중단합니다.
pub async fn read_record_form(mut payload: Multipart, max_image_bytes: usize) -> AppResult<RecordForm> {
    let mut form = RecordForm::default();

    while let Some(mut field) = payload.try_next().await.map_err(multipart_error)? {
        let Some(name) = field.name().map(str::to_string) else {
            read_text_field(&mut field, "(unnamed)").await?;
            continue;
        };

        if name == IMAGE_FIELD {
            let file_name = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .map(str::to_string);
            let content_type = field.content_type().map(|mime| mime.to_string());
            let bytes = read_field(&mut field, max_image_bytes)
                .await?
                .map_err(|size| UploadError::TooLarge {
                    size,
                    limit: max_image_bytes,
                })?;

            if file_name.is_none() || bytes.is_empty() {
                debug!("빈 이미지 파트를 무시합니다");
                continue;
            }

            form.image = Some(ImageUpload {
                file_name,
                content_type,
                bytes,
            });
        } else {
            let bytes = read_text_field(&mut field, &name).await?;
            let value = String::from_utf8(bytes)
                .map_err(|_| AppError::ValidationError(format!("{} 필드가 UTF-8 문자열이 아닙니다", name)))?;

            form.fields.insert(name, value);
        }
    }

    Ok(form)
}

/// 파트 본문을 `limit` 바이트까지 읽습니다.
///
/// 제한을 넘는 청크를 만나면 나머지를 읽지 않고 `Err(읽은 크기)`를 돌려줍니다.
async fn read_field(field: &mut Field, limit: usize) -> AppResult<Result<Vec<u8>, usize>> {
    let mut bytes = Vec::new();

    while let Some(chunk) = field.try_next().await.map_err(multipart_error)? {
        let size = bytes.len() + chunk.len();
        if size > limit {
            return Ok(Err(size));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(Ok(bytes))
}

async fn read_text_field(field: &mut Field, name: &str) -> AppResult<Vec<u8>> {
    read_field(field, MAX_TEXT_FIELD_BYTES).await?.map_err(|_| {
        AppError::ValidationError(format!(
            "{} 필드가 최대 크기({} bytes)를 초과했습니다", name, MAX_TEXT_FIELD_BYTES
        ))
    })
}

fn multipart_error(e: actix_multipart::MultipartError) -> AppError {
    AppError::ValidationError(format!("잘못된 multipart 요청: {}", e))
}
