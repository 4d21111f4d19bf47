//! # HTTP Handlers Module
//!
//! HTTP 요청을 받아 서비스 계층으로 전달하고 응답을 만드는 핸들러들입니다.
//!
//! ```text
//! HTTP Request ──▶ Handler ──▶ web::Data<dyn UserService> ──▶ Repository
//!                    │
//!                    └── AppError → HTTP 상태 코드 (이 계층에서만 변환)
//! ```
//!
//! 서비스는 `main`에서 `web::Data::from(Arc<dyn UserService>)`로 앱에 등록되며,
//! 테스트에서는 같은 방식으로 대역을 주입합니다.

pub mod users;
