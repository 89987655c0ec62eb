//! # Profile HTTP Handlers
//!
//! `/api/profile` 스코프. 정적 경로(`/all`, `/handle/..`, `/user/..`,
//! `/experience`, `/education`)가 서로 겹치지 않도록 각자 고유 접두사를 가집니다.
//!
//! | 메서드 | 경로 | 인증 |
//! |--------|------|------|
//! | `GET` | `/` | Bearer |
//! | `POST` | `/` | Bearer |
//! | `DELETE` | `/` | Bearer |
//! | `GET` | `/all` | - |
//! | `GET` | `/handle/{handle}` | - |
//! | `GET` | `/user/{user_id}` | - |
//! | `POST` | `/experience` | Bearer |
//! | `DELETE` | `/experience/{exp_id}` | Bearer |
//! | `POST` | `/education` | Bearer |
//! | `DELETE` | `/education/{edu_id}` | Bearer |

use actix_web::{delete, get, post, web, HttpResponse};
use serde_json::json;

use crate::domain::dto::profiles::request::{EducationRequest, ExperienceRequest, ProfileRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::middlewares::AuthMiddleware;
use crate::services::ProfileService;
use crate::validation::{validate_education_input, validate_experience_input, validate_profile_input};

/// 현재 사용자의 프로필 (소유자 이름/아바타 포함)
#[get("", wrap = "AuthMiddleware::required()")]
pub async fn current_profile(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let profile = service.get_current(&user).await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[get("/all")]
pub async fn all_profiles(service: web::Data<ProfileService>) -> Result<HttpResponse, AppError> {
    let profiles = service.get_all().await?;
    Ok(HttpResponse::Ok().json(profiles))
}

#[get("/handle/{handle}")]
pub async fn profile_by_handle(
    service: web::Data<ProfileService>,
    handle: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let profile = service.get_by_handle(&handle).await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[get("/user/{user_id}")]
pub async fn profile_by_user(
    service: web::Data<ProfileService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let profile = service.get_by_user_id(&user_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// 프로필 생성 또는 갱신
///
/// 본문에 들어 있는 비어 있지 않은 필드만 반영됩니다. `skills` 는 쉼표로 구분합니다.
#[post("", wrap = "AuthMiddleware::required()")]
pub async fn upsert_profile(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    payload: web::Json<ProfileRequest>,
) -> Result<HttpResponse, AppError> {
    validate_profile_input(&payload).into_result()?;

    let profile = service.upsert(&user, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// 계정 삭제. 프로필이 먼저 지워지고 사용자 문서가 지워집니다.
#[delete("", wrap = "AuthMiddleware::required()")]
pub async fn delete_account(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    service.delete_account(&user).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

#[post("/experience", wrap = "AuthMiddleware::required()")]
pub async fn add_experience(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    payload: web::Json<ExperienceRequest>,
) -> Result<HttpResponse, AppError> {
    validate_experience_input(&payload).into_result()?;

    let profile = service.add_experience(&user, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[delete("/experience/{exp_id}", wrap = "AuthMiddleware::required()")]
pub async fn delete_experience(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    exp_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let profile = service.delete_experience(&user, &exp_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[post("/education", wrap = "AuthMiddleware::required()")]
pub async fn add_education(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    payload: web::Json<EducationRequest>,
) -> Result<HttpResponse, AppError> {
    validate_education_input(&payload).into_result()?;

    let profile = service.add_education(&user, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[delete("/education/{edu_id}", wrap = "AuthMiddleware::required()")]
pub async fn delete_education(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    edu_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let profile = service.delete_education(&user, &edu_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}
