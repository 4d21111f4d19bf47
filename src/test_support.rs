//! 테스트용 리포지토리/서비스 대역

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::User;
use crate::domain::models::{DeleteOutcome, InsertOutcome, UpdateOutcome};
use crate::repositories::users::UserRepository;
use crate::repositories::users::user_repo::parse_object_id;
use crate::services::users::UserService;

/// 삽입 순서를 유지하는 인메모리 리포지토리
///
/// MongoDB 구현과 같은 규칙을 따릅니다: 식별자 파싱 실패는 `InvalidId`,
/// 수정 대상 없음은 `NotFound`, 없는 문서 삭제는 `deleted_count == 0`.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    failure: Mutex<Option<String>>,
}

impl InMemoryUserRepository {
    /// 이후 모든 호출이 `DatabaseError(message)`로 실패하도록 설정합니다.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn check_failure(&self) -> AppResult<()> {
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(AppError::DatabaseError(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, mut user: User) -> AppResult<InsertOutcome> {
        self.check_failure()?;
        let id = ObjectId::new();
        user.id = Some(id);
        self.users.lock().unwrap().push(user);
        Ok(InsertOutcome { inserted_id: id.to_hex() })
    }

    async fn get_all(&self) -> AppResult<Vec<User>> {
        self.check_failure()?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn get_by_id(&self, id: &str) -> AppResult<User> {
        let object_id = parse_object_id(id)?;
        self.check_failure()?;
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == Some(object_id))
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("no user with id {}", id)))
    }

    async fn update(&self, id: &str, user: User) -> AppResult<UpdateOutcome> {
        let object_id = parse_object_id(id)?;
        self.check_failure()?;
        let mut users = self.users.lock().unwrap();
        let existing = users
            .iter_mut()
            .find(|u| u.id == Some(object_id))
            .ok_or_else(|| AppError::NotFound(format!("no user with id {}", id)))?;

        let replacement = User { id: existing.id, ..user };
        let modified_count = u64::from(*existing != replacement);
        *existing = replacement;

        Ok(UpdateOutcome { matched_count: 1, modified_count })
    }

    async fn delete(&self, id: &str) -> AppResult<DeleteOutcome> {
        let object_id = parse_object_id(id)?;
        self.check_failure()?;
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != Some(object_id));
        Ok(DeleteOutcome { deleted_count: (before - users.len()) as u64 })
    }
}

/// 서비스 호출 한 건
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceCall {
    Create(User),
    GetAll,
    GetById(String),
    Update(String, User),
    Delete(String),
}

/// 호출을 기록하고, 설정된 에러 또는 고정된 결과를 돌려주는 서비스 대역
#[derive(Default)]
pub struct RecordingUserService {
    calls: Mutex<Vec<ServiceCall>>,
    error: Mutex<Option<fn() -> AppError>>,
}

impl RecordingUserService {
    /// 모든 호출이 `make_error()`로 실패하도록 설정합니다.
    pub fn failing(make_error: fn() -> AppError) -> Self {
        Self {
            calls: Mutex::default(),
            error: Mutex::new(Some(make_error)),
        }
    }

    pub fn calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ServiceCall) -> AppResult<()> {
        self.calls.lock().unwrap().push(call);
        match *self.error.lock().unwrap() {
            Some(make_error) => Err(make_error()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserService for RecordingUserService {
    async fn create_user(&self, user: User) -> AppResult<InsertOutcome> {
        self.record(ServiceCall::Create(user))?;
        Ok(InsertOutcome { inserted_id: "fake-id".to_string() })
    }

    async fn get_all_users(&self) -> AppResult<Vec<User>> {
        self.record(ServiceCall::GetAll)?;
        Ok(Vec::new())
    }

    async fn get_user_by_id(&self, id: &str) -> AppResult<User> {
        self.record(ServiceCall::GetById(id.to_string()))?;
        Ok(User::new(
            "Carlos".to_string(),
            "López".to_string(),
            "carlos@example.com".to_string(),
            "pass123".to_string(),
        ))
    }

    async fn update_user(&self, id: &str, user: User) -> AppResult<UpdateOutcome> {
        self.record(ServiceCall::Update(id.to_string(), user))?;
        Ok(UpdateOutcome { matched_count: 1, modified_count: 1 })
    }

    async fn delete_user(&self, id: &str) -> AppResult<DeleteOutcome> {
        self.record(ServiceCall::Delete(id.to_string()))?;
        Ok(DeleteOutcome { deleted_count: 1 })
    }
}
