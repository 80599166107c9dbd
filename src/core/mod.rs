//! # Core Module
//!
//! 레코드 서비스 전반에서 공유하는 핵심 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 상태 코드 자동 매핑
//! - **AppResult**: `Result<T, AppError>` 별칭
//!
//! ## 의존성 주입
//!
//! 서비스와 저장소는 전역 싱글톤 대신 생성 시점에 트레이트 객체로 주입됩니다.
//! `main`에서 조립한 `RecordService<T>`를 `web::Data`로 등록하고,
//! 테스트에서는 같은 자리에 인메모리 저장소와 스텁 업로더를 끼워 넣습니다.

pub mod errors;

pub use errors::*;
