//! # User Data Transfer Objects Module
//!
//! ```text
//! users/
//! ├── request/     # 클라이언트 → 서버 (생성, 수정 본문)
//! └── response/    # 서버 → 클라이언트 (비밀번호 제외된 사용자 정보)
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
