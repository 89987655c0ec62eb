//! 미들웨어 모듈
//!
//! 요청 파이프라인의 횡단 관심사를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <token>` 헤더에서 토큰 추출
//! - 서명/만료 검증 후 저장된 사용자를 조회
//! - [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser) 를 request extension 에 저장
//! - 실패 시 핸들러를 호출하지 않고 401 응답
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{get, HttpResponse};
//! use crate::domain::models::auth::AuthenticatedUser;
//!
//! #[get("/current", wrap = "AuthMiddleware::required()")]
//! async fn current(user: AuthenticatedUser) -> HttpResponse {
//!     HttpResponse::Ok().json(user.id_string())
//! }
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
