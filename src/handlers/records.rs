//! # Record HTTP Handlers
//!
//! 사용자와 캠페인 엔드포인트가 공유하는 제네릭 핸들러입니다.
//! 엔티티별 라우트 등록은 `routes` 모듈에서 타입 인자를 지정하여 수행합니다.
//!
//! | 핸들러 | 성공 응답 |
//! |--------|-----------|
//! | `register::<T>` | 201 `{ message, <T::RESPONSE_KEY>: T::Response }` |
//! | `search::<T>` | 200 `[T::Response]`, 결과가 없으면 404 |
//! | `get_one::<T>` | 200 `T::Response` |
//! | `modify::<T>` | 200 `{ message, <T::RESPONSE_KEY>: T::Response }` |
//! | `remove::<T>` | 200 `{ message }` |
//! | `list::<T>` | 200 `[T::Response]` |
//!
//! 실패는 모두 `AppError`로 전파되어 `{ "error": "..." }` 형태로 응답됩니다.

use std::collections::HashMap;

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use serde_json::{json, Map, Value};

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::entities::Record;
use crate::handlers::multipart::read_record_form;
use crate::services::records::RecordService;

pub async fn register<T: Record>(
    service: web::Data<RecordService<T>>,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    let form = read_record_form(payload, service.constraints().max_bytes).await?;
    let record = service.register(&form.fields, form.image).await?;

    let body = record_envelope(format!("{}이(가) 등록되었습니다", T::LABEL), record)?;
    Ok(HttpResponse::Created().json(body))
}

/// 검색 필드 이름과 같은 쿼리 파라미터로 검색합니다.
///
/// `GET /users/searchByAddress?address=0xabc`
pub async fn search<T: Record>(
    service: web::Data<RecordService<T>>,
    query: web::Query<HashMap<String, String>>,
) -> AppResult<HttpResponse> {
    let term = query.get(T::SEARCH_FIELD).map(String::as_str);
    let records = service.search(term).await?;

    if records.is_empty() {
        return Err(AppError::NotFound(format!("검색 조건에 맞는 {}이(가) 없습니다", T::LABEL)));
    }

    Ok(HttpResponse::Ok().json(to_responses(records)))
}

pub async fn get_one<T: Record>(
    service: web::Data<RecordService<T>>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let record = service.get(&id).await?;

    Ok(HttpResponse::Ok().json(T::Response::from(record)))
}

pub async fn modify<T: Record>(
    service: web::Data<RecordService<T>>,
    id: web::Path<String>,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    let form = read_record_form(payload, service.constraints().max_bytes).await?;
    let record = service.modify(&id, &form.fields, form.image).await?;

    let body = record_envelope(format!("{}이(가) 수정되었습니다", T::LABEL), record)?;
    Ok(HttpResponse::Ok().json(body))
}

pub async fn remove<T: Record>(
    service: web::Data<RecordService<T>>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    service.remove(&id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": format!("{}이(가) 삭제되었습니다", T::LABEL)
    })))
}

pub async fn list<T: Record>(
    service: web::Data<RecordService<T>>,
) -> AppResult<HttpResponse> {
    let records = service.list().await?;

    Ok(HttpResponse::Ok().json(to_responses(records)))
}

fn to_responses<T: Record>(records: Vec<T>) -> Vec<T::Response> {
    records.into_iter().map(T::Response::from).collect()
}

/// `{ "message": ..., "<RESPONSE_KEY>": ... }` 응답 본문
fn record_envelope<T: Record>(message: String, record: T) -> AppResult<Value> {
    let response = serde_json::to_value(T::Response::from(record)).context("응답 직렬화 실패")?;

    let mut body = Map::new();
    body.insert("message".to_string(), Value::String(message));
    body.insert(T::RESPONSE_KEY.to_string(), response);

    Ok(Value::Object(body))
}
