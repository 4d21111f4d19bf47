//! API 라우트 설정 모듈
//!
//! 사용자 CRUD 라우트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::from(user_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{web, HttpResponse};

use crate::handlers;

/// 헬스체크 응답 본문 (JSON 문자열 리터럴)
pub const HEALTH_MESSAGE: &str = "Service is up";

/// 모든 라우트를 설정합니다
///
/// - `GET /health`, `GET /health/` - 헬스체크
/// - `/users` - 사용자 CRUD ([`handlers::users::configure`])
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(["/health", "/health/"]).route(web::get().to(health_check)));

    handlers::users::configure(cfg);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 의존성이 없으며 항상 `200 OK`와 고정된 문자열을 반환합니다.
///
/// ```bash
/// curl http://localhost:8080/health
/// # "Service is up"
/// ```
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HEALTH_MESSAGE)
}
