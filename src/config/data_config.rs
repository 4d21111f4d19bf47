//! 데이터 및 서버 설정 관리 모듈
//!
//! MongoDB 연결, HTTP 서버 바인딩, Rate Limiting 관련 설정을 환경 변수에서 읽어옵니다.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use log::error;

/// 환경 변수를 파싱하고, 실패하면 기본값을 사용합니다.
///
/// 값이 있지만 파싱에 실패한 경우에는 에러 로그를 남깁니다.
fn parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}

/// MongoDB 연결 설정
///
/// ## 환경 변수
/// - `MONGO_URI`: 연결 URI (기본값: "mongodb://localhost:27017")
/// - `MONGO_DB_NAME`: 데이터베이스 이름 (기본값: "users_db")
/// - `MONGO_COLLECTION_NAME`: 사용자 컬렉션 이름 (기본값: "users")
/// - `MONGO_CONNECT_TIMEOUT_SECS`: 연결 타임아웃 초 (기본값: 10)
#[derive(Debug, Clone, PartialEq)]
pub struct MongoConfig {
    pub uri: String,
    pub database_name: String,
    pub collection_name: String,
    pub connect_timeout: Duration,
}

impl MongoConfig {
    pub const DEFAULT_URI: &'static str = "mongodb://localhost:27017";
    pub const DEFAULT_DATABASE_NAME: &'static str = "users_db";
    pub const DEFAULT_COLLECTION_NAME: &'static str = "users";
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Self {
        Self {
            uri: env::var("MONGO_URI").unwrap_or_else(|_| Self::DEFAULT_URI.to_string()),
            database_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| Self::DEFAULT_DATABASE_NAME.to_string()),
            collection_name: env::var("MONGO_COLLECTION_NAME")
                .unwrap_or_else(|_| Self::DEFAULT_COLLECTION_NAME.to_string()),
            connect_timeout: Duration::from_secs(parse_or(
                "MONGO_CONNECT_TIMEOUT_SECS",
                Self::DEFAULT_CONNECT_TIMEOUT_SECS,
            )),
        }
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: Self::DEFAULT_URI.to_string(),
            database_name: Self::DEFAULT_DATABASE_NAME.to_string(),
            collection_name: Self::DEFAULT_COLLECTION_NAME.to_string(),
            connect_timeout: Duration::from_secs(Self::DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        parse_or("PORT", 8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 워커 스레드 수 (`SERVER_WORKERS`, 기본값: 4)
    pub fn workers() -> usize {
        parse_or("SERVER_WORKERS", 4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        Self {
            per_second: parse_or("RATE_LIMIT_PER_SECOND", 100),
            burst_size: parse_or("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}
