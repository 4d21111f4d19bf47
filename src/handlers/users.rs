//! # User Management HTTP Handlers
//!
//! 사용자 CRUD 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 요청 본문을 바인딩하고, 서비스 결과와 에러를 HTTP 상태 코드로 변환하는
//! 유일한 지점입니다.
//!
//! | 메서드 | 경로 | 성공 | 실패 |
//! |--------|------|------|------|
//! | `POST` | `/users/` | 201 Created | 400 (본문), 500 |
//! | `GET` | `/users/` | 200 OK | 500 |
//! | `GET` | `/users/{id}` | 200 OK | 400 (식별자), 404, 500 |
//! | `PUT` | `/users/{id}` | 200 OK | 400 (본문), 500 |
//! | `DELETE` | `/users/{id}` | 200 OK | 500 |
//!
//! 에러 응답 본문은 `{"error": "<message>"}` 형태입니다.

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use log::{debug, error};

use crate::core::errors::AppError;
use crate::domain::dto::users::{UserRequest, UserResponse};
use crate::services::users::UserService;

/// `/users` 스코프의 라우트 테이블을 등록합니다.
///
/// 컬렉션 경로는 `/users`와 `/users/` 모두 허용합니다.
/// JSON 바인딩 실패는 서비스 호출 전에 `AppError::InvalidPayload`(400)로 응답합니다.
/// `Content-Type` 헤더가 없어도 본문은 JSON으로 디코딩합니다.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .app_data(json_config())
            .service(
                web::resource(["", "/"])
                    .route(web::post().to(create_user))
                    .route(web::get().to(get_all_users)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_user_by_id))
                    .route(web::put().to(update_user))
                    .route(web::delete().to(delete_user)),
            ),
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            debug!("요청 본문 바인딩 실패: {}", err);
            AppError::InvalidPayload(err.to_string()).into()
        })
}

/// 고정 상태 코드 라우트의 실패 응답. 저장소 에러만 error 레벨로 남깁니다.
fn failure(action: &str, status: StatusCode, e: AppError) -> HttpResponse {
    match e {
        AppError::DatabaseError(_) => error!("{} 실패: {}", action, e),
        _ => debug!("{} 실패: {}", action, e),
    }
    e.response_with(status)
}

/// 새 사용자 생성
///
/// 성공 시 `201 Created`와 `{"insertedId": "<hex>"}`를 반환합니다.
pub async fn create_user(
    service: web::Data<dyn UserService>,
    payload: web::Json<UserRequest>,
) -> HttpResponse {
    match service.create_user(payload.into_inner().into()).await {
        Ok(outcome) => HttpResponse::Created().json(outcome),
        Err(e) => failure("사용자 생성", StatusCode::INTERNAL_SERVER_ERROR, e),
    }
}

/// 전체 사용자 목록. 빈 컬렉션이면 `[]`입니다.
pub async fn get_all_users(service: web::Data<dyn UserService>) -> HttpResponse {
    match service.get_all_users().await {
        Ok(users) => {
            let body: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
            HttpResponse::Ok().json(body)
        }
        Err(e) => failure("사용자 목록 조회", StatusCode::INTERNAL_SERVER_ERROR, e),
    }
}

/// 사용자 단건 조회
///
/// 에러 종류에 따라 상태 코드가 갈립니다: 없는 사용자는 404,
/// 파싱할 수 없는 식별자는 400, 저장소 오류는 500.
pub async fn get_user_by_id(
    service: web::Data<dyn UserService>,
    id: web::Path<String>,
) -> HttpResponse {
    match service.get_user_by_id(&id).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(e) => {
            let status = e.status_code();
            failure("사용자 조회", status, e)
        }
    }
}

/// 사용자 정보 수정 (`$set` 의미론)
///
/// 일치하는 사용자가 없거나 식별자가 잘못된 경우를 포함해 모든 서비스 에러는 500입니다.
pub async fn update_user(
    service: web::Data<dyn UserService>,
    id: web::Path<String>,
    payload: web::Json<UserRequest>,
) -> HttpResponse {
    match service.update_user(&id, payload.into_inner().into()).await {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(e) => failure("사용자 수정", StatusCode::INTERNAL_SERVER_ERROR, e),
    }
}

/// 사용자 삭제. 없는 사용자 삭제는 `{"deletedCount": 0}`으로 성공합니다.
pub async fn delete_user(
    service: web::Data<dyn UserService>,
    id: web::Path<String>,
) -> HttpResponse {
    match service.delete_user(&id).await {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(e) => failure("사용자 삭제", StatusCode::INTERNAL_SERVER_ERROR, e),
    }
}
