//! # Cloudinary 업로더
//!
//! Cloudinary Upload API에 서명된 multipart 요청을 보내 이미지를 저장합니다.
//!
//! ## 요청 형식
//!
//! ```text
//! POST {api_base}/v1_1/{cloud_name}/image/upload
//! Content-Type: multipart/form-data
//!
//! file=<binary>
//! api_key=...
//! timestamp=1315060510
//! folder=uploads
//! allowed_formats=jpg,png,jpeg
//! signature_algorithm=sha256
//! signature=sha256("allowed_formats=...&folder=...&timestamp=..." + api_secret)
//! ```
//!
//! 응답 본문의 `secure_url`을 레코드의 `image` 값으로 사용합니다.

use async_trait::async_trait;
use log::{debug, info};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::config::CloudinaryConfig;
use crate::core::errors::{AppError, AppResult};
use crate::services::uploads::{ImageUpload, ImageUploader, UploadConstraints, UploadError};

#[derive(Debug, Deserialize)]
struct CloudinaryUploadResponse {
    secure_url: String,
}

#[derive(Debug, Deserialize)]
struct CloudinaryErrorResponse {
    error: CloudinaryErrorBody,
}

#[derive(Debug, Deserialize)]
struct CloudinaryErrorBody {
    message: String,
}

pub struct CloudinaryUploader {
    client: reqwest::Client,
    cloud_name: String,
    api_key: String,
    api_secret: String,
    api_base: String,
}

impl CloudinaryUploader {
    pub fn new(
        client: reqwest::Client,
        cloud_name: String,
        api_key: String,
        api_secret: String,
        api_base: String,
    ) -> Self {
        Self {
            client,
            cloud_name,
            api_key,
            api_secret,
            api_base,
        }
    }

    /// 환경 변수로부터 업로더를 구성합니다.
    ///
    /// 자격 증명(`CLOUDINARY_CLOUD_NAME`, `CLOUDINARY_API_KEY`,
    /// `CLOUDINARY_API_SECRET`) 중 하나라도 없으면 `InternalError`를 반환합니다.
    pub fn from_env() -> AppResult<Self> {
        let missing = |key: &str| AppError::InternalError(format!("{} 환경 변수가 설정되지 않았습니다", key));

        let cloud_name = CloudinaryConfig::cloud_name().ok_or_else(|| missing("CLOUDINARY_CLOUD_NAME"))?;
        let api_key = CloudinaryConfig::api_key().ok_or_else(|| missing("CLOUDINARY_API_KEY"))?;
        let api_secret = CloudinaryConfig::api_secret().ok_or_else(|| missing("CLOUDINARY_API_SECRET"))?;

        info!("☁️ Cloudinary 업로더 구성: cloud={}", cloud_name);

        Ok(Self::new(
            reqwest::Client::new(),
            cloud_name,
            api_key,
            api_secret,
            CloudinaryConfig::api_base(),
        ))
    }

    fn upload_url(&self) -> String {
        format!("{}/v1_1/{}/image/upload", self.api_base, self.cloud_name)
    }

    /// 업로드 파라미터 서명
    ///
    /// 파라미터를 키 이름순으로 정렬해 `key=value`를 `&`로 잇고,
    /// API secret을 덧붙인 문자열의 SHA-256 16진수 다이제스트를 반환합니다.
    pub fn sign(params: &[(&str, String)], api_secret: &str) -> String {
        let mut sorted: Vec<&(&str, String)> = params.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        let to_sign = sorted
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");

        let mut hasher = Sha256::new();
        hasher.update(to_sign.as_bytes());
        hasher.update(api_secret.as_bytes());

        format!("{:x}", hasher.finalize())
    }
}

#[async_trait]
impl ImageUploader for CloudinaryUploader {
    async fn store(&self, image: ImageUpload, constraints: &UploadConstraints) -> Result<String, UploadError> {
        let format = constraints.check(&image)?;

        let params: Vec<(&'static str, String)> = vec![
            ("allowed_formats", constraints.allowed_formats.join(",")),
            ("folder", constraints.folder.clone()),
            ("timestamp", chrono::Utc::now().timestamp().to_string()),
        ];
        let signature = Self::sign(&params, &self.api_secret);

        let ImageUpload {
            file_name,
            content_type,
            bytes,
        } = image;
        let size = bytes.len();
        let file_name = file_name.unwrap_or_else(|| format!("upload.{}", format));

        let mut part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        if let Some(content_type) = content_type {
            part = part
                .mime_str(&content_type)
                .map_err(|e| UploadError::Provider(format!("잘못된 Content-Type: {}", e)))?;
        }

        let mut form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("api_key", self.api_key.clone())
            .text("signature_algorithm", "sha256")
            .text("signature", signature);
        for (key, value) in params {
            form = form.text(key, value);
        }

        let upload_start = std::time::Instant::now();

        let response = self.client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Provider(format!("Cloudinary 요청 실패: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<CloudinaryErrorResponse>(&error_text)
                .map(|body| body.error.message)
                .unwrap_or(error_text);

            return Err(UploadError::Provider(format!(
                "Cloudinary 업로드 실패 ({}): {}", status.as_u16(), message
            )));
        }

        let body = response
            .json::<CloudinaryUploadResponse>()
            .await
            .map_err(|e| UploadError::Provider(format!("Cloudinary 응답 파싱 실패: {}", e)))?;

        debug!("Image upload took: {:?} ({} bytes)", upload_start.elapsed(), size);

        Ok(body.secure_url)
    }
}
