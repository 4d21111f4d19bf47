//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//! `.env` 파일은 `main`에서 `PROFILE`에 따라 먼저 로드되며,
//! 이 모듈의 접근자들은 로드된 프로세스 환경만 읽습니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # MongoDB
//! export MONGO_URI="mongodb://localhost:27017"
//! export MONGO_DB_NAME="users_db"
//! export MONGO_COLLECTION_NAME="users"
//!
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

pub mod data_config;

pub use data_config::*;
