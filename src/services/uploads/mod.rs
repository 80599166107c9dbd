//! # Image Upload Module
//!
//! 레코드 이미지를 외부 미디어 호스트에 저장하는 업로더 계약입니다.
//! 서비스는 [`ImageUploader`] 트레이트에만 의존하며, 운영 환경에서는
//! [`CloudinaryUploader`]가 주입됩니다.
//!
//! ```rust,ignore
//! let url = uploader.store(image, &constraints).await?;
//! // "https://res.cloudinary.com/<cloud>/image/upload/v1/uploads/abc.jpg"
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{CloudinaryConfig, ALLOWED_IMAGE_FORMATS};

pub mod cloudinary;

#[cfg(test)]
pub mod stub;

pub use cloudinary::CloudinaryUploader;

/// 이미지 업로드 실패
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("업로드할 이미지가 비어 있습니다")]
    EmptyPayload,

    #[error("이미지 크기가 제한을 초과했습니다: {size} bytes (최대 {limit} bytes)")]
    TooLarge { size: usize, limit: usize },

    #[error("허용되지 않는 이미지 형식입니다: {0}")]
    UnsupportedFormat(String),

    #[error("이미지 저장소 오류: {0}")]
    Provider(String),
}

/// multipart 요청에서 읽어 온 이미지 파트
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// 이미지 포맷 추정
    ///
    /// 파일 확장자를 우선 사용하고, 없으면 `Content-Type`의 서브타입을 사용합니다.
    pub fn format(&self) -> Option<String> {
        let from_name = self.file_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.trim().to_lowercase())
            .filter(|ext| !ext.is_empty());

        from_name.or_else(|| {
            self.content_type
                .as_deref()
                .and_then(|ct| ct.split(';').next())
                .and_then(|mime| mime.trim().strip_prefix("image/"))
                .map(str::to_lowercase)
        })
    }
}

/// 업로드 제약 조건
#[derive(Debug, Clone)]
pub struct UploadConstraints {
    /// 허용 포맷 (소문자)
    pub allowed_formats: Vec<String>,
    /// 미디어 호스트의 저장 폴더
    pub folder: String,
    pub max_bytes: usize,
}

impl Default for UploadConstraints {
    fn default() -> Self {
        Self {
            allowed_formats: ALLOWED_IMAGE_FORMATS.iter().map(|f| f.to_string()).collect(),
            folder: "uploads".to_string(),
            max_bytes: 10 * 1024 * 1024,
        }
    }
}

impl UploadConstraints {
    pub fn from_env() -> Self {
        Self {
            folder: CloudinaryConfig::folder(),
            max_bytes: CloudinaryConfig::max_image_bytes(),
            ..Self::default()
        }
    }

    /// 이미지가 제약 조건을 만족하는지 검사하고, 확인된 포맷을 반환합니다.
    pub fn check(&self, image: &ImageUpload) -> Result<String, UploadError> {
        if image.bytes.is_empty() {
            return Err(UploadError::EmptyPayload);
        }

        if image.bytes.len() > self.max_bytes {
            return Err(UploadError::TooLarge {
                size: image.bytes.len(),
                limit: self.max_bytes,
            });
        }

        let format = image.format()
            .ok_or_else(|| UploadError::UnsupportedFormat("unknown".to_string()))?;

        if !self.allowed_formats.iter().any(|allowed| *allowed == format) {
            return Err(UploadError::UnsupportedFormat(format));
        }

        Ok(format)
    }
}

/// 이미지 업로더 계약
///
/// 바이너리를 저장하고 안정적인 공개 URL을 반환합니다.
/// 재시도는 하지 않으며, 모든 실패는 `UploadError`로 보고합니다.
#[async_trait]
pub trait ImageUploader: Send + Sync {
    async fn store(&self, image: ImageUpload, constraints: &UploadConstraints) -> Result<String, UploadError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(file_name: Option<&str>, content_type: Option<&str>, size: usize) -> ImageUpload {
        ImageUpload {
            file_name: file_name.map(str::to_string),
            content_type: content_type.map(str::to_string),
            bytes: vec![0xFF; size],
        }
    }

    #[test]
    fn test_format_prefers_extension() {
        assert_eq!(image(Some("Cat.JPG"), Some("image/png"), 1).format(), Some("jpg".to_string()));
        assert_eq!(image(Some("cat"), Some("image/png"), 1).format(), Some("png".to_string()));
        assert_eq!(image(None, Some("image/jpeg; charset=binary"), 1).format(), Some("jpeg".to_string()));
        assert_eq!(image(None, Some("application/octet-stream"), 1).format(), None);
    }

    #[test]
    fn test_check_accepts_allowed_formats() {
        let constraints = UploadConstraints::default();

        for name in ["a.jpg", "a.png", "a.jpeg"] {
            assert!(constraints.check(&image(Some(name), None, 16)).is_ok(), "{}", name);
        }
    }

    #[test]
    fn test_check_rejects_bad_payloads() {
        let constraints = UploadConstraints {
            max_bytes: 8,
            ..UploadConstraints::default()
        };

        assert!(matches!(
            constraints.check(&image(Some("a.gif"), None, 4)),
            Err(UploadError::UnsupportedFormat(format)) if format == "gif"
        ));
        assert!(matches!(
            constraints.check(&image(Some("a.png"), None, 0)),
            Err(UploadError::EmptyPayload)
        ));
        assert!(matches!(
            constraints.check(&image(Some("a.png"), None, 9)),
            Err(UploadError::TooLarge { size: 9, limit: 8 })
        ));
    }
}
