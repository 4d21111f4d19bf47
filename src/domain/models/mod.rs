//! 저장소 작업 결과 모델
//!
//! 드라이버의 `InsertOneResult` 등은 외부에서 생성할 수 없으므로,
//! 리포지토리는 결과를 이 타입들로 옮겨 반환합니다. 그대로 HTTP 응답 본문이 됩니다.

pub mod store_outcome;

pub use store_outcome::*;
