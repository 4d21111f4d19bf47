//! 애플리케이션 전반에서 공유하는 핵심 타입
//!
//! 현재는 계층 간에 그대로 전달되는 [`AppError`](errors::AppError)만 포함합니다.

pub mod errors;

pub use errors::*;
