//! # Post HTTP Handlers
//!
//! `/api/posts` 스코프. `/like/..`, `/unlike/..`, `/comment/..` 는 `/{id}` 보다
//! 먼저 등록되어야 합니다.

use actix_web::{delete, get, post, web, HttpResponse};
use serde_json::json;

use crate::domain::dto::posts::request::PostRequest;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::middlewares::AuthMiddleware;
use crate::services::PostService;
use crate::validation::validate_post_input;

/// 전체 게시물, 최신순
#[get("")]
pub async fn list_posts(service: web::Data<PostService>) -> Result<HttpResponse, AppError> {
    let posts = service.list().await?;
    Ok(HttpResponse::Ok().json(posts))
}

#[get("/{id}")]
pub async fn get_post(
    service: web::Data<PostService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let post = service.get(&id).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[post("", wrap = "AuthMiddleware::required()")]
pub async fn create_post(
    service: web::Data<PostService>,
    user: AuthenticatedUser,
    payload: web::Json<PostRequest>,
) -> Result<HttpResponse, AppError> {
    validate_post_input(&payload).into_result()?;

    let post = service.create(&user, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// 작성자 본인만 삭제할 수 있습니다. 성공 응답의 키는 대문자 `Success` 입니다.
#[delete("/{id}", wrap = "AuthMiddleware::required()")]
pub async fn delete_post(
    service: web::Data<PostService>,
    user: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete(&user, &id).await?;
    Ok(HttpResponse::Ok().json(json!({ "Success": true })))
}

#[post("/like/{id}", wrap = "AuthMiddleware::required()")]
pub async fn like_post(
    service: web::Data<PostService>,
    user: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let post = service.like(&user, &id).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[post("/unlike/{id}", wrap = "AuthMiddleware::required()")]
pub async fn unlike_post(
    service: web::Data<PostService>,
    user: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let post = service.unlike(&user, &id).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[post("/comment/{id}", wrap = "AuthMiddleware::required()")]
pub async fn add_comment(
    service: web::Data<PostService>,
    user: AuthenticatedUser,
    id: web::Path<String>,
    payload: web::Json<PostRequest>,
) -> Result<HttpResponse, AppError> {
    validate_post_input(&payload).into_result()?;

    let post = service.comment(&user, &id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[delete("/comment/{id}/{comment_id}", wrap = "AuthMiddleware::required()")]
pub async fn delete_comment(
    service: web::Data<PostService>,
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (id, comment_id) = path.into_inner();

    let post = service.delete_comment(&user, &id, &comment_id).await?;
    Ok(HttpResponse::Ok().json(post))
}
