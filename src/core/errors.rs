//! # Application Error Types
//!
//! 모든 계층이 공유하는 에러 타입입니다.
//! 리포지토리와 서비스는 에러를 그대로 전달하고, HTTP 상태 코드로의 변환은
//! 핸들러 계층에서만 일어납니다.
//!
//! | Variant | 기본 상태 코드 |
//! |---------|----------------|
//! | `InvalidPayload` | 400 Bad Request |
//! | `InvalidId` | 400 Bad Request |
//! | `NotFound` | 404 Not Found |
//! | `DatabaseError` | 500 Internal Server Error |

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// 요청 본문을 JSON으로 바인딩하지 못한 경우
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// ObjectId 16진수 문자열로 파싱할 수 없는 식별자
    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// MongoDB 드라이버 또는 연결 오류
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// 단일 필드 에러 응답 본문 `{"error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&AppError> for ErrorBody {
    fn from(error: &AppError) -> Self {
        Self { error: error.to_string() }
    }
}

impl AppError {
    /// 지정한 상태 코드로 에러 응답을 생성합니다.
    ///
    /// 라우트마다 상태 코드가 고정된 핸들러(생성, 목록, 수정, 삭제)에서 사용합니다.
    pub fn response_with(&self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(ErrorBody::from(self))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidPayload(_) | AppError::InvalidId(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        self.response_with(self.status_code())
    }
}

pub type AppResult<T> = Result<T, AppError>;
