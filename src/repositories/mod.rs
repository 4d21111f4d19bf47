//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 리포지토리는 `main`에서 [`Database`](crate::db::Database) 핸들을 받아 생성되고,
//! `Arc<dyn UserRepository>`로 서비스에 주입됩니다.

pub mod users;
