//! # Domain Module
//!
//! 사용자 CRUD 서비스의 도메인 타입을 정의합니다.
//!
//! ```text
//! domain/
//! ├── entities/   ← MongoDB 문서와 1:1 대응되는 엔티티
//! ├── models/     ← 저장소 작업 결과 (삽입/수정/삭제 건수)
//! └── dto/        ← HTTP 요청/응답 본문
//! ```

pub mod entities;
pub mod models;
pub mod dto;

pub use entities::users::User;
pub use models::{DeleteOutcome, InsertOutcome, UpdateOutcome};
