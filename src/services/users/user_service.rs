//! # 사용자 관리 서비스 구현
//!
//! 핸들러와 리포지토리 사이의 교체 지점입니다. 각 연산은 리포지토리의 같은 연산으로
//! 그대로 위임되며, 결과와 에러를 변환하지 않습니다.
//!
//! ```text
//! Handler ──▶ UserService ──▶ UserRepository ──▶ MongoDB
//!    ▲             │                 │
//!    └─────────────┴─ AppError ──────┘ (변환 없이 전달)
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::users::User;
use crate::domain::models::{DeleteOutcome, InsertOutcome, UpdateOutcome};
use crate::repositories::users::UserRepository;

/// 사용자 서비스 계약
///
/// 핸들러는 `web::Data<dyn UserService>`로 이 트레이트에 의존합니다.
/// 조회 전용 변형은 `get_all_users` / `get_user_by_id` 두 연산만 사용하면 됩니다.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn create_user(&self, user: User) -> AppResult<InsertOutcome>;

    async fn get_all_users(&self) -> AppResult<Vec<User>>;

    async fn get_user_by_id(&self, id: &str) -> AppResult<User>;

    async fn update_user(&self, id: &str, user: User) -> AppResult<UpdateOutcome>;

    async fn delete_user(&self, id: &str) -> AppResult<DeleteOutcome>;
}

/// 리포지토리에 그대로 위임하는 기본 구현
pub struct DefaultUserService {
    user_repo: Arc<dyn UserRepository>,
}

impl DefaultUserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl UserService for DefaultUserService {
    async fn create_user(&self, user: User) -> AppResult<InsertOutcome> {
        self.user_repo.create(user).await
    }

    async fn get_all_users(&self) -> AppResult<Vec<User>> {
        self.user_repo.get_all().await
    }

    async fn get_user_by_id(&self, id: &str) -> AppResult<User> {
        self.user_repo.get_by_id(id).await
    }

    async fn update_user(&self, id: &str, user: User) -> AppResult<UpdateOutcome> {
        self.user_repo.update(id, user).await
    }

    async fn delete_user(&self, id: &str) -> AppResult<DeleteOutcome> {
        self.user_repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use crate::test_support::InMemoryUserRepository;

    fn juan() -> User {
        User::new(
            "Juan".to_string(),
            "Henao".to_string(),
            "juan@example.com".to_string(),
            "123".to_string(),
        )
    }

    fn service_with(repo: Arc<InMemoryUserRepository>) -> DefaultUserService {
        DefaultUserService::new(repo)
    }

    #[actix_web::test]
    async fn test_create_user_returns_assigned_id() {
        let repo = Arc::new(InMemoryUserRepository::default());
        let service = service_with(repo.clone());

        let outcome = service.create_user(juan()).await.unwrap();

        assert_eq!(outcome.inserted_id.len(), 24);
        assert_eq!(repo.len(), 1);
    }

    #[actix_web::test]
    async fn test_get_all_users_preserves_order() {
        let repo = Arc::new(InMemoryUserRepository::default());
        let service = service_with(repo);
        service.create_user(juan()).await.unwrap();
        service
            .create_user(User::new("Angie".into(), "Diaz".into(), "angie@example.com".into(), "456".into()))
            .await
            .unwrap();

        let users = service.get_all_users().await.unwrap();

        let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Juan", "Angie"]);
    }

    #[actix_web::test]
    async fn test_get_all_users_on_empty_store() {
        let service = service_with(Arc::new(InMemoryUserRepository::default()));

        assert!(service.get_all_users().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_get_user_by_id() {
        let service = service_with(Arc::new(InMemoryUserRepository::default()));
        let outcome = service.create_user(juan()).await.unwrap();

        let user = service.get_user_by_id(&outcome.inserted_id).await.unwrap();

        assert_eq!(user.id_string().unwrap(), outcome.inserted_id);
        assert_eq!(user.email, "juan@example.com");
    }

    #[actix_web::test]
    async fn test_repository_errors_pass_through_unchanged() {
        let service = service_with(Arc::new(InMemoryUserRepository::default()));

        let missing = service.get_user_by_id(&mongodb::bson::oid::ObjectId::new().to_hex()).await;
        let malformed = service.get_user_by_id("abc123").await;

        assert!(matches!(missing, Err(AppError::NotFound(_))));
        assert!(matches!(malformed, Err(AppError::InvalidId(_))));
    }

    #[actix_web::test]
    async fn test_update_user_overwrites_all_fields() {
        let service = service_with(Arc::new(InMemoryUserRepository::default()));
        let id = service.create_user(juan()).await.unwrap().inserted_id;

        let outcome = service
            .update_user(&id, User { name: "NewName".into(), ..User::default() })
            .await
            .unwrap();
        let user = service.get_user_by_id(&id).await.unwrap();

        assert_eq!(outcome, UpdateOutcome { matched_count: 1, modified_count: 1 });
        assert_eq!(user.name, "NewName");
        assert_eq!(user.last_name, "");
    }

    #[actix_web::test]
    async fn test_delete_user_is_idempotent() {
        let service = service_with(Arc::new(InMemoryUserRepository::default()));
        let id = service.create_user(juan()).await.unwrap().inserted_id;

        let first = service.delete_user(&id).await.unwrap();
        let second = service.delete_user(&id).await.unwrap();

        assert_eq!(first.deleted_count, 1);
        assert_eq!(second.deleted_count, 0);
    }

    #[actix_web::test]
    async fn test_store_failure_surfaces_immediately() {
        let repo = Arc::new(InMemoryUserRepository::default());
        repo.fail_with("server selection timeout");
        let service = service_with(repo);

        let result = service.get_all_users().await;

        assert!(matches!(result, Err(AppError::DatabaseError(msg)) if msg == "server selection timeout"));
    }
}
