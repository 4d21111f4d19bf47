//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 JSON 본문 구조를 정의합니다.
//! 엔티티를 그대로 노출하지 않고, 요청은 쓰기 가능한 필드만 받고
//! 응답에서는 비밀번호를 제외합니다.

pub mod users;

pub use users::*;
