//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 엔티티마다 리포지토리를 따로 두지 않고, `Record` 트레이트로 매개변수화된
//! 하나의 저장소 계약(`RecordStore<T>`)과 두 가지 구현을 제공합니다.
//!
//! # Features
//!
//! - [`record_store`] - 저장소 계약과 공통 에러 헬퍼
//! - [`mongo_record_store`] - MongoDB 컬렉션 기반 구현 (운영)
//! - [`memory_record_store`] - 프로세스 메모리 기반 구현 (테스트, 로컬 개발)
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::{MongoRecordStore, RecordStore};
//! use crate::domain::entities::campaigns::Campaign;
//!
//! let store: Arc<dyn RecordStore<Campaign>> = Arc::new(MongoRecordStore::new(&database));
//! let campaigns = store.find_all().await?;
//! ```

pub mod memory_record_store;
pub mod mongo_record_store;
pub mod record_store;

pub use memory_record_store::InMemoryRecordStore;
pub use mongo_record_store::MongoRecordStore;
pub use record_store::RecordStore;
