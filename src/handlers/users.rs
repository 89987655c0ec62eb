//! # User HTTP Handlers
//!
//! 계정 관련 엔드포인트입니다. `/api/users` 스코프 아래에 마운트됩니다.
//!
//! | 메서드 | 경로 | 인증 | 설명 |
//! |--------|------|------|------|
//! | `GET` | `/test` | - | 라우트 동작 확인 |
//! | `POST` | `/register` | - | 회원가입 |
//! | `POST` | `/login` | - | 로그인, Bearer 토큰 발급 |
//! | `GET` | `/current` | Bearer | 현재 사용자 |
//!
//! 본문 검증 실패는 필드별 메시지 맵과 함께 400 으로 응답합니다.
//!
//! ```bash
//! curl -X POST http://localhost:5000/api/users/login \
//!   -H "Content-Type: application/json" \
//!   -d '{"email":"a@a.com","password":"secret1"}'
//! ```

use actix_web::{get, post, web, HttpResponse};
use serde_json::json;

use crate::domain::dto::users::{CurrentUserResponse, LoginRequest, RegisterRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::middlewares::AuthMiddleware;
use crate::services::UserService;
use crate::validation::{validate_login_input, validate_register_input};

#[get("/test")]
pub async fn users_test() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "msg": "Users Work" }))
}

/// 회원가입 핸들러
///
/// 검증 → 이메일 중복 확인 → 아바타 생성 → 해싱 → 저장 순서로 처리하며,
/// 저장된 사용자 문서를 200 으로 돌려줍니다.
#[post("/register")]
pub async fn register(
    service: web::Data<UserService>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    validate_register_input(&payload).into_result()?;

    let user = service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 로그인 핸들러
///
/// 성공하면 `{"success": true, "token": "Bearer <jwt>"}` 를 돌려줍니다.
#[post("/login")]
pub async fn login(
    service: web::Data<UserService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    validate_login_input(&payload).into_result()?;

    let response = service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[get("/current", wrap = "AuthMiddleware::required()")]
pub async fn current(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(CurrentUserResponse::from(&user)))
}
