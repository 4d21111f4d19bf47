//! # 사용자 리포지토리 구현
//!
//! 사용자 컬렉션에 대한 CRUD 연산을 담당하는 데이터 액세스 계층입니다.
//!
//! ## 에러 처리
//!
//! 모든 메서드는 `Result<T, AppError>`를 반환합니다.
//!
//! - **InvalidId**: 16진수 ObjectId로 파싱할 수 없는 식별자
//! - **NotFound**: 조회/수정 대상 문서가 없음
//! - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
//!
//! 재시도나 트랜잭션은 없으며, 드라이버 에러는 즉시 호출자에게 전달됩니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::Collection;
use mongodb::bson::{doc, oid::ObjectId};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::User;
use crate::domain::models::{DeleteOutcome, InsertOutcome, UpdateOutcome};

/// 사용자 데이터 액세스 계약
///
/// 서비스 계층은 이 트레이트에만 의존하므로 테스트에서 인메모리 구현으로 교체할 수 있습니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 문서를 그대로 삽입하고 할당된 식별자를 반환합니다.
    async fn create(&self, user: User) -> AppResult<InsertOutcome>;

    /// 컬렉션의 모든 문서를 저장소 순서대로 반환합니다. 비어 있으면 빈 벡터입니다.
    async fn get_all(&self) -> AppResult<Vec<User>>;

    async fn get_by_id(&self, id: &str) -> AppResult<User>;

    /// 일치하는 문서의 쓰기 가능 필드를 `$set`으로 덮어씁니다.
    ///
    /// 일치하는 문서가 없으면 `AppError::NotFound`를 반환합니다.
    async fn update(&self, id: &str, user: User) -> AppResult<UpdateOutcome>;

    /// 일치하는 문서 하나를 삭제합니다. 없는 식별자는 에러가 아니라 `deleted_count == 0`입니다.
    async fn delete(&self, id: &str) -> AppResult<DeleteOutcome>;
}

/// 식별자 문자열을 ObjectId로 파싱합니다.
pub fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|e| AppError::InvalidId(e.to_string()))
}

/// MongoDB 기반 사용자 리포지토리
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let database = Database::connect(&config).await?;
/// let repo = MongoUserRepository::new(&database, &config.collection_name);
///
/// let created = repo.create(user).await?;
/// let found = repo.get_by_id(&created.inserted_id).await?;
/// ```
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(database: &Database, collection_name: &str) -> Self {
        Self::from_collection(database.collection::<User>(collection_name))
    }

    pub fn from_collection(collection: Collection<User>) -> Self {
        Self { collection }
    }

    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(&self, user: User) -> AppResult<InsertOutcome> {
        let result = self
            .collection
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let inserted_id = result
            .inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .unwrap_or_else(|| result.inserted_id.to_string());

        debug!("사용자 생성: {}", inserted_id);

        Ok(InsertOutcome { inserted_id })
    }

    async fn get_all(&self) -> AppResult<Vec<User>> {
        // 커서는 여기서 모두 소비되고, 스코프를 벗어나면 드롭되어 닫힙니다.
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect::<Vec<User>>()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn get_by_id(&self, id: &str) -> AppResult<User> {
        let object_id = parse_object_id(id)?;

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .ok_or_else(|| AppError::NotFound(format!("no user with id {}", id)))
    }

    async fn update(&self, id: &str, user: User) -> AppResult<UpdateOutcome> {
        let object_id = parse_object_id(id)?;

        let result = self
            .collection
            .update_one(
                doc! { "_id": object_id },
                doc! { "$set": user.writable_fields() },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("no user with id {}", id)));
        }

        Ok(UpdateOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn delete(&self, id: &str) -> AppResult<DeleteOutcome> {
        let object_id = parse_object_id(id)?;

        let result = self
            .collection
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(DeleteOutcome {
            deleted_count: result.deleted_count,
        })
    }
}
