//! # Image Upload Configuration
//!
//! Cloudinary 이미지 업로드 관련 설정을 관리합니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! export CLOUDINARY_CLOUD_NAME="your-cloud-name"
//! export CLOUDINARY_API_KEY="123456789012345"
//! export CLOUDINARY_API_SECRET="your-api-secret"
//! ```
//!
//! ## 선택 환경 변수
//!
//! ```bash
//! export CLOUDINARY_FOLDER="uploads"                     # 업로드 폴더
//! export CLOUDINARY_API_BASE="https://api.cloudinary.com"
//! export MAX_IMAGE_BYTES="10485760"                     # 10 MiB
//! ```

use std::env;

/// 업로드를 허용하는 이미지 포맷
pub const ALLOWED_IMAGE_FORMATS: [&str; 3] = ["jpg", "png", "jpeg"];

const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

pub struct CloudinaryConfig;

impl CloudinaryConfig {
    pub fn cloud_name() -> Option<String> {
        non_empty_var("CLOUDINARY_CLOUD_NAME")
    }

    pub fn api_key() -> Option<String> {
        non_empty_var("CLOUDINARY_API_KEY")
    }

    pub fn api_secret() -> Option<String> {
        non_empty_var("CLOUDINARY_API_SECRET")
    }

    pub fn folder() -> String {
        non_empty_var("CLOUDINARY_FOLDER").unwrap_or_else(|| "uploads".to_string())
    }

    pub fn api_base() -> String {
        non_empty_var("CLOUDINARY_API_BASE")
            .unwrap_or_else(|| "https://api.cloudinary.com".to_string())
            .trim_end_matches('/')
            .to_string()
    }

    pub fn max_image_bytes() -> usize {
        env::var("MAX_IMAGE_BYTES")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_MAX_IMAGE_BYTES)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
