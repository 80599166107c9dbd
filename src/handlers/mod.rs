//! # HTTP Request Handlers Module
//!
//! 웹 요청을 처리하는 핸들러 함수들입니다. 핸들러는 요청 본문을 해석하여
//! 서비스에 위임하고, 결과를 JSON 응답으로 변환하는 일만 담당합니다.
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   HTTP Client   │───▶│    Handlers     │───▶│RecordService<T> │
//! │                 │    │                 │    │                 │
//! │ multipart/query │    │ • Form Parsing  │    │ • Validation    │
//! │                 │◀───│ • Response DTO  │◀───│ • Upload/Store  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## 의존성 주입
//!
//! 서비스는 `App::app_data(web::Data<RecordService<T>>)`로 등록되고
//! 핸들러 인자로 추출됩니다. 등록되지 않은 타입을 요청하면 actix-web이 500을 반환합니다.
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::new(user_service))
//!     .route("/users/allData", web::get().to(handlers::records::list::<User>))
//! ```
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `AppResult<HttpResponse>`를 반환하며, `AppError`의
//! `ResponseError` 구현이 상태 코드와 `{ "error": "..." }` 본문을 결정합니다.

pub mod multipart;
pub mod records;
