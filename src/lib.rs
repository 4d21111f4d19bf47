//! 사용자 CRUD 서비스
//!
//! MongoDB에 저장된 사용자 레코드를 REST API로 노출하는 서비스입니다.
//! 세 계층은 각자 아래 계층으로 그대로 위임하며, 에러를 HTTP 상태 코드로
//! 바꾸는 곳은 핸들러 계층뿐입니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /users, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← JSON 바인딩, 상태 코드 매핑
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 교체 가능한 위임 계층
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← ObjectId 파싱, 컬렉션 연산
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use users_service::db::Database;
//! use users_service::repositories::users::MongoUserRepository;
//! use users_service::services::users::{DefaultUserService, UserService};
//!
//! let database = Database::connect(&config).await?;
//! let repo = Arc::new(MongoUserRepository::new(&database, &config.collection_name));
//! let service: Arc<dyn UserService> = Arc::new(DefaultUserService::new(repo));
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;

#[cfg(test)]
pub(crate) mod test_support;
