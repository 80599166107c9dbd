//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수에서 읽으며, 개발 환경에서 안전한 기본값을 가집니다.
//! `main`이 `PROFILE`에 맞는 `.env` 파일을 먼저 로드합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 데이터베이스, CORS, 실행 환경 설정
//! - [`upload_config`] - Cloudinary 이미지 업로드 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{DatabaseConfig, ServerConfig, CloudinaryConfig};
//!
//! let bind_address = ServerConfig::bind_address();
//! let database_name = DatabaseConfig::database_name();
//! let folder = CloudinaryConfig::folder();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="3000"
//! export WORKERS="4"
//!
//! # 데이터베이스 설정
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="crowdfund"
//! export STORE_BACKEND="mongo"   # mongo | memory
//!
//! # CORS (비워두면 모든 Origin 허용)
//! export CORS_ALLOWED_ORIGINS="http://localhost:5173"
//! ```

pub mod data_config;
pub mod upload_config;

pub use data_config::*;
pub use upload_config::*;
