//! 서비스 계층 모듈
//!
//! 핸들러가 의존하는 트레이트와 그 기본 구현을 제공합니다.
//! 서비스는 생성자에서 리포지토리를 주입받으며, 전역 인스턴스는 없습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use users_service::services::users::{DefaultUserService, UserService};
//!
//! let service: Arc<dyn UserService> = Arc::new(DefaultUserService::new(repo));
//! ```

pub mod users;
