//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 엔티티들을 정의합니다.
//! 모든 엔티티는 `_id` 필드를 `Option<ObjectId>`로 가지며,
//! 삽입 전에는 `None`, 저장소가 할당한 뒤에는 변경되지 않습니다.

pub mod users;

pub use users::*;
