//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용해 모든 실패를
//! 핸들러 경계에서 JSON 응답으로 변환합니다. 클라이언트가 보는 실패는
//! 항상 구조화된 JSON 이며, 필드 단위 에러는 `{필드: 메시지}` 형태의
//! 평탄한 객체로 직렬화됩니다.
//!
//! ## 상태 코드 매핑
//!
//! | AppError | HTTP Status | 본문 |
//! |----------|-------------|------|
//! | `ValidationError` | 400 | 필드 맵 |
//! | `BadRequest` | 400 | 필드 맵 |
//! | `ConflictError` | 400 | 필드 맵 |
//! | `AuthorizationError` | 400 | 필드 맵 |
//! | `NotFound` | 404 | 필드 맵 |
//! | `AuthenticationError` | 401 | `{"error": "Unauthorized"}` |
//! | `DatabaseError` | 400 | `{"error": 원본 메시지}` |
//! | `InternalError` | 500 | `{"error": "Internal server error"}` |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, FieldErrors};
//!
//! let post = repo.find_by_id(&id).await?
//!     .ok_or_else(|| AppError::BadRequest(FieldErrors::single("post", "Post with this Id does not exist!")))?;
//! ```

use std::collections::BTreeMap;
use std::fmt;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

/// 필드 이름 → 사용자 메시지 맵
///
/// JSON 으로는 키 순서가 고정된 평탄한 객체가 됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    /// 같은 필드에 대해서는 나중에 넣은 메시지가 이전 메시지를 덮어씁니다.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&joined)
    }
}

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 요청 본문 검증 실패
    #[error("Validation error: {0}")]
    ValidationError(FieldErrors),

    /// 도메인 규칙에 의한 거절 (프로필 없음, 게시물 없음, 중복 좋아요 등)
    #[error("Bad request: {0}")]
    BadRequest(FieldErrors),

    /// 프로필 조회 실패
    #[error("Not found: {0}")]
    NotFound(FieldErrors),

    /// 이메일/핸들 중복
    #[error("Conflict error: {0}")]
    ConflictError(FieldErrors),

    /// 토큰 없음, 만료, 위조 등. 세부 사유는 로그에만 남깁니다.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 다른 사용자의 리소스에 대한 변경 시도
    #[error("Authorization error: {0}")]
    AuthorizationError(FieldErrors),

    /// 저장소 오류. 원본 메시지를 그대로 노출합니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::BadRequest(_)
            | AppError::ConflictError(_)
            | AppError::AuthorizationError(_)
            | AppError::DatabaseError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());

        match self {
            AppError::ValidationError(errors)
            | AppError::BadRequest(errors)
            | AppError::NotFound(errors)
            | AppError::ConflictError(errors)
            | AppError::AuthorizationError(errors) => builder.json(errors),
            AppError::AuthenticationError(reason) => {
                log::warn!("인증 실패: {}", reason);
                builder.json(serde_json::json!({ "error": "Unauthorized" }))
            }
            AppError::DatabaseError(message) => {
                log::error!("데이터베이스 오류: {}", message);
                builder.json(serde_json::json!({ "error": message }))
            }
            AppError::InternalError(message) => {
                log::error!("내부 오류: {}", message);
                builder.json(serde_json::json!({ "error": "Internal server error" }))
            }
        }
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 `InternalError`로 변환하는 확장 trait
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
