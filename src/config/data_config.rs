//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, CORS 및 실행 환경 관련 설정을 관리합니다.

use std::env;

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` (없으면 `NODE_ENV`) 환경 변수로부터 현재 환경을 결정합니다.
    pub fn current() -> Self {
        let value = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()));

        Self::from_str(&value)
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// actix 워커 스레드 수
    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|w| *w > 0)
            .unwrap_or(4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// CORS 설정
///
/// `CORS_ALLOWED_ORIGINS`가 비어 있으면 모든 Origin을 허용합니다.
///
/// ```bash
/// export CORS_ALLOWED_ORIGINS="http://localhost:5173,https://app.example.com"
/// ```
pub struct CorsConfig;

impl CorsConfig {
    pub fn allowed_origins() -> Vec<String> {
        Self::parse_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default())
    }

    pub fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| origin.trim_end_matches('/').to_string())
            .collect()
    }
}

/// 레코드 저장소 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// MongoDB 컬렉션 (기본값)
    Mongo,
    /// 프로세스 메모리 (로컬 개발용, 재시작 시 데이터 소멸)
    Memory,
}

impl StoreBackend {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StoreBackend::Memory,
            _ => StoreBackend::Mongo,
        }
    }
}

/// 데이터베이스 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 연결 URI (`MONGODB_URI`, 없으면 `MONGO_URI`)
    pub fn uri() -> String {
        env::var("MONGODB_URI")
            .or_else(|_| env::var("MONGO_URI"))
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "crowdfund".to_string())
    }

    pub fn backend() -> StoreBackend {
        StoreBackend::from_str(&env::var("STORE_BACKEND").unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("Stage"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 3000);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }

        if env::var("WORKERS").is_err() {
            assert_eq!(ServerConfig::workers(), 4);
        }
    }

    #[test]
    fn test_parse_origins() {
        assert!(CorsConfig::parse_origins("").is_empty());
        assert!(CorsConfig::parse_origins(" , ").is_empty());
        assert_eq!(
            CorsConfig::parse_origins("http://localhost:5173/, https://app.example.com"),
            vec!["http://localhost:5173", "https://app.example.com"]
        );
    }

    #[test]
    fn test_store_backend_from_string() {
        assert_eq!(StoreBackend::from_str("memory"), StoreBackend::Memory);
        assert_eq!(StoreBackend::from_str(" In-Memory "), StoreBackend::Memory);
        assert_eq!(StoreBackend::from_str("mongo"), StoreBackend::Mongo);
        assert_eq!(StoreBackend::from_str(""), StoreBackend::Mongo);
    }

    #[test]
    fn test_database_config_defaults() {
        if env::var("DATABASE_NAME").is_err() {
            assert_eq!(DatabaseConfig::database_name(), "crowdfund");
        }
    }
}
