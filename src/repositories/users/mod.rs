//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository) 트레이트와 MongoDB 구현체
//! [`MongoUserRepository`](user_repo::MongoUserRepository)를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use users_service::repositories::users::{MongoUserRepository, UserRepository};
//!
//! let repo = MongoUserRepository::new(&database, "users");
//! let users = repo.get_all().await?;
//! ```

pub mod user_repo;

pub use user_repo::{MongoUserRepository, UserRepository};
