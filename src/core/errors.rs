//! # Application Error Handling System
//!
//! 레코드 서비스 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 모든 실패를 일관된 JSON 응답으로 변환합니다.
//!
//! ## 에러 분류
//!
//! 클라이언트 입력 오류는 저장소 호출 이전에 검출되어 400으로 응답되고,
//! 존재하지 않는 리소스는 404, 외부 시스템(MongoDB, Cloudinary) 실패는
//! 내용을 가공하지 않고 500으로 전달됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `MissingField` | 400 Bad Request | 필수 필드 누락 |
//! | `MissingImage` | 400 Bad Request | 이미지 없이 생성 요청 |
//! | `InvalidIdentifier` | 400 Bad Request | ObjectId 형식이 아닌 ID |
//! | `MissingQuery` | 400 Bad Request | 검색어 없는 검색 요청 |
//! | `ValidationError` | 400 Bad Request | 잘못된 요청 본문 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `UploadError` | 500 Internal Server Error | 이미지 저장소 오류 |
//! | `DatabaseError` | 500 Internal Server Error | 데이터베이스 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn get_campaign(id: &str) -> AppResult<Campaign> {
//!     let object_id = parse_object_id(id)?; // InvalidIdentifier → 400
//!     store.get_by_id(&object_id.to_hex()).await // NotFound → 404
//! }
//! ```

use actix_web::http::StatusCode;
use log::{error, warn};
use thiserror::Error;

use crate::services::uploads::UploadError;

/// 애플리케이션 전역 에러 타입
///
/// 모든 서비스, 저장소, 핸들러가 이 타입을 반환합니다.
/// 핸들러에서 `?`로 전파하면 `ResponseError` 구현에 의해
/// 상태 코드와 `{ "error": "..." }` 본문으로 자동 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 필수 필드가 없거나 공백뿐인 경우 (400 Bad Request)
    #[error("필수 항목이 누락되었습니다: {0}")]
    MissingField(String),

    /// 생성 요청에 이미지가 없는 경우 (400 Bad Request)
    #[error("이미지를 업로드해야 합니다")]
    MissingImage,

    /// ObjectId 형식이 아닌 식별자 (400 Bad Request)
    #[error("유효하지 않은 ID 형식입니다")]
    InvalidIdentifier,

    /// 검색어 없이 검색을 요청한 경우 (400 Bad Request)
    #[error("검색어를 입력해야 합니다: {0}")]
    MissingQuery(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 이미지 업로드 실패 (500 Internal Server Error)
    ///
    /// 업로더가 돌려준 원인은 그대로 메시지에 포함하지만,
    /// 분류상으로는 불투명한 외부 실패로 취급합니다.
    #[error("Upload error: {0}")]
    UploadError(#[from] UploadError),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러 종류에 대응하는 HTTP 상태 코드
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingField(_)
            | AppError::MissingImage
            | AppError::InvalidIdentifier
            | AppError::MissingQuery(_)
            | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UploadError(_)
            | AppError::DatabaseError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 다음 형식을 따릅니다:
    ///
    /// ```json
    /// {
    ///   "error": "유효하지 않은 ID 형식입니다"
    /// }
    /// ```
    ///
    /// 5xx 에러는 서버 로그에 `error` 레벨로 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status();

        if status.is_server_error() {
            error!("❌ {} 응답: {}", status.as_u16(), self);
        } else {
            warn!("{} 응답: {}", status.as_u16(), self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// BSON 직렬화처럼 클라이언트 입력과 무관한 변환 실패를
/// `InternalError`로 감쌀 때 사용합니다.
///
/// ```rust,ignore
/// let update = mongodb::bson::to_document(&patch)
///     .context("업데이트 문서 변환 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
