//! API 라우트 설정 모듈
//!
//! 기능별 스코프를 묶어 애플리케이션에 등록합니다.
//!
//! - `/api/users` - 가입, 로그인, 현재 사용자
//! - `/api/profile` - 프로필, 경력, 학력, 계정 삭제
//! - `/api/posts` - 게시물, 좋아요, 댓글
//! - `/`, `/health` - 상태 확인
//!
//! 인증이 필요한 라우트는 핸들러 매크로의 `wrap` 으로 개별 지정합니다.
//! 같은 스코프 안에 공개/보호 라우트가 섞여 있기 때문입니다.
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .configure(|cfg| container.register(cfg))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::errors::{AppError, FieldErrors};
use crate::handlers;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    cfg.service(index).service(health_check);

    configure_user_routes(cfg);
    configure_profile_routes(cfg);
    configure_post_routes(cfg);
}

/// 본문 역직렬화 실패도 다른 검증 오류와 같은 필드 맵 형태로 응답합니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("요청 본문 파싱 실패: {}", err);
        AppError::BadRequest(FieldErrors::single("body", err.to_string())).into()
    })
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::users_test)
            .service(handlers::users::register)
            .service(handlers::users::login)
            .service(handlers::users::current),
    );
}

fn configure_profile_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/profile")
            .service(handlers::profiles::all_profiles)
            .service(handlers::profiles::profile_by_handle)
            .service(handlers::profiles::profile_by_user)
            .service(handlers::profiles::add_experience)
            .service(handlers::profiles::delete_experience)
            .service(handlers::profiles::add_education)
            .service(handlers::profiles::delete_education)
            .service(handlers::profiles::current_profile)
            .service(handlers::profiles::upsert_profile)
            .service(handlers::profiles::delete_account),
    );
}

fn configure_post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/posts")
            .service(handlers::posts::like_post)
            .service(handlers::posts::unlike_post)
            .service(handlers::posts::add_comment)
            .service(handlers::posts::delete_comment)
            .service(handlers::posts::list_posts)
            .service(handlers::posts::create_post)
            .service(handlers::posts::get_post)
            .service(handlers::posts::delete_post),
    );
}

#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok().content_type("text/plain").body("Hello World")
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:5000/health
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "dev_connector_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "auth": "Bearer JWT"
        }
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::dev::{Service, ServiceResponse};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use actix_http::Request;
    use serde_json::{json, Value};

    use super::*;
    use crate::core::AppContainer;
    use crate::repositories::{MemoryPostRepository, MemoryProfileRepository, MemoryUserRepository};
    use crate::services::auth::{PasswordService, TokenService};

    async fn app() -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        app_with_users(Arc::new(MemoryUserRepository::new())).await
    }

    async fn app_with_users(
        users: Arc<MemoryUserRepository>,
    ) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        let container = AppContainer::new(
            users,
            Arc::new(MemoryProfileRepository::new()),
            Arc::new(MemoryPostRepository::new()),
            PasswordService::new(4),
            TokenService::new("test-secret", 3600),
        );
        test::init_service(
            App::new()
                .configure(|cfg| container.register(cfg))
                .configure(configure_all_routes),
        )
        .await
    }

    async fn send<S>(app: &S, req: test::TestRequest) -> (StatusCode, Value)
    where
        S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
    {
        let resp = test::call_service(app, req.to_request()).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, value)
    }

    async fn register_and_login<S>(app: &S, name: &str, email: &str) -> (String, String)
    where
        S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
    {
        let (status, user) = send(
            app,
            test::TestRequest::post().uri("/api/users/register").set_json(json!({
                "name": name,
                "email": email,
                "password": "secret1",
                "password2": "secret1"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, login) = send(
            app,
            test::TestRequest::post()
                .uri("/api/users/login")
                .set_json(json!({ "email": email, "password": "secret1" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let token = login["token"].as_str().unwrap_or_default().to_string();
        let id = user["_id"].as_str().unwrap_or_default().to_string();
        (token, id)
    }

    fn authed(req: test::TestRequest, token: &str) -> test::TestRequest {
        req.insert_header(("Authorization", token.to_string()))
    }

    #[actix_web::test]
    async fn test_root_and_health() {
        let app = app().await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "Hello World");

        let (status, body) = send(&app, test::TestRequest::get().uri("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");

        let (_, body) = send(&app, test::TestRequest::get().uri("/api/users/test")).await;
        assert_eq!(body, json!({ "msg": "Users Work" }));
    }

    #[actix_web::test]
    async fn test_register_login_current() {
        let app = app().await;
        let (token, id) = register_and_login(&app, "Al", "a@a.com").await;
        assert!(token.starts_with("Bearer "));

        let (status, body) = send(&app, authed(test::TestRequest::get().uri("/api/users/current"), &token)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "id": id, "name": "Al", "email": "a@a.com" }));

        let (status, _) = send(&app, test::TestRequest::get().uri("/api/users/current")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_register_validation_and_duplicate() {
        let users = Arc::new(MemoryUserRepository::new());
        let app = app_with_users(users.clone()).await;
        register_and_login(&app, "Al", "a@a.com").await;

        let (status, body) = send(
            &app,
            test::TestRequest::post().uri("/api/users/register").set_json(json!({
                "name": "Al",
                "email": "a@a.com",
                "password": "secret1",
                "password2": "secret1"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "email": "Email Already Exists!" }));
        assert_eq!(users.count_with_email("a@a.com"), 1);

        let (status, body) = send(
            &app,
            test::TestRequest::post()
                .uri("/api/users/register")
                .set_json(json!({ "name": "A", "email": "nope" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.get("name").is_some());
        assert!(body.get("email").is_some());
        assert!(body.get("password").is_some());
    }

    #[actix_web::test]
    async fn test_malformed_body_is_field_map() {
        let app = app().await;

        let req = test::TestRequest::post()
            .uri("/api/users/login")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json");
        let (status, body) = send(&app, req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.get("body").is_some());
    }

    #[actix_web::test]
    async fn test_profile_flow() {
        let app = app().await;
        let (al, al_id) = register_and_login(&app, "Al", "a@a.com").await;
        let (bo, _) = register_and_login(&app, "Bo", "b@a.com").await;

        let (status, body) = send(&app, authed(test::TestRequest::get().uri("/api/profile"), &al)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "noprofile": "There is no profile for this user" }));

        let (status, created) = send(
            &app,
            authed(test::TestRequest::post().uri("/api/profile"), &al).set_json(json!({
                "handle": "al",
                "status": "Developer",
                "skills": "rust,go",
                "twitter": "https://twitter.com/al"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["skills"], json!(["rust", "go"]));
        assert_eq!(created["social"]["twitter"], "https://twitter.com/al");

        let (status, body) = send(
            &app,
            authed(test::TestRequest::post().uri("/api/profile"), &bo)
                .set_json(json!({ "handle": "al", "status": "Developer", "skills": "js" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "handle": "That handle already exists" }));

        let (status, by_handle) = send(&app, test::TestRequest::get().uri("/api/profile/handle/al")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(by_handle["user"]["_id"], al_id);
        assert_eq!(by_handle["user"]["name"], "Al");

        let (status, all) = send(&app, test::TestRequest::get().uri("/api/profile/all")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(all.as_array().map(Vec::len), Some(1));

        let (status, _) = send(&app, test::TestRequest::get().uri(&format!("/api/profile/user/{}", al_id))).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_experience_add_and_delete() {
        let app = app().await;
        let (al, _) = register_and_login(&app, "Al", "a@a.com").await;

        let experience = json!({ "title": "Dev", "company": "Acme", "from": "2020-01-01" });

        let (status, body) = send(
            &app,
            authed(test::TestRequest::post().uri("/api/profile/experience"), &al).set_json(experience.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.get("noprofile").is_some());

        send(
            &app,
            authed(test::TestRequest::post().uri("/api/profile"), &al)
                .set_json(json!({ "handle": "al", "status": "Developer", "skills": "rust" })),
        )
        .await;

        let (status, profile) = send(
            &app,
            authed(test::TestRequest::post().uri("/api/profile/experience"), &al).set_json(experience),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let exp_id = profile["experience"][0]["_id"].as_str().unwrap_or_default().to_string();
        assert!(!exp_id.is_empty());

        let (status, profile) = send(
            &app,
            authed(test::TestRequest::delete().uri(&format!("/api/profile/experience/{}", exp_id)), &al),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(profile["experience"], json!([]));
    }

    #[actix_web::test]
    async fn test_account_delete_invalidates_token() {
        let app = app().await;
        let (al, _) = register_and_login(&app, "Al", "a@a.com").await;
        send(
            &app,
            authed(test::TestRequest::post().uri("/api/profile"), &al)
                .set_json(json!({ "handle": "al", "status": "Developer", "skills": "rust" })),
        )
        .await;

        let (status, body) = send(&app, authed(test::TestRequest::delete().uri("/api/profile"), &al)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true }));

        let (status, _) = send(&app, test::TestRequest::get().uri("/api/profile/handle/al")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, authed(test::TestRequest::get().uri("/api/users/current"), &al)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_post_like_and_delete_rules() {
        let app = app().await;
        let (al, _) = register_and_login(&app, "Al", "a@a.com").await;
        let (bo, _) = register_and_login(&app, "Bo", "b@a.com").await;
        for (token, handle) in [(&al, "al"), (&bo, "bo")] {
            send(
                &app,
                authed(test::TestRequest::post().uri("/api/profile"), token)
                    .set_json(json!({ "handle": handle, "status": "Developer", "skills": "rust" })),
            )
            .await;
        }

        let (status, post) = send(
            &app,
            authed(test::TestRequest::post().uri("/api/posts"), &al)
                .set_json(json!({ "text": "Hello from the connector", "name": "Al" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let post_id = post["_id"].as_str().unwrap_or_default().to_string();

        let like_uri = format!("/api/posts/like/{}", post_id);
        let (status, liked) = send(&app, authed(test::TestRequest::post().uri(&like_uri), &bo)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(liked["likes"].as_array().map(Vec::len), Some(1));

        let (status, body) = send(&app, authed(test::TestRequest::post().uri(&like_uri), &bo)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "alreadyliked": "User already liked this post" }));

        let (status, body) = send(
            &app,
            authed(test::TestRequest::post().uri(&format!("/api/posts/unlike/{}", post_id)), &al),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "alreadyliked": "You have not yet liked this post" }));

        let post_uri = format!("/api/posts/{}", post_id);
        let (status, body) = send(&app, authed(test::TestRequest::delete().uri(&post_uri), &bo)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "notauthorised": "User not authorized!" }));

        let (first_status, first) = send(&app, test::TestRequest::get().uri(&post_uri)).await;
        let (second_status, second) = send(&app, test::TestRequest::get().uri(&post_uri)).await;
        assert_eq!(first_status, StatusCode::OK);
        assert_eq!(second_status, StatusCode::OK);
        assert_eq!(first, second);

        let (status, body) = send(&app, authed(test::TestRequest::delete().uri(&post_uri), &al)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "Success": true }));

        let (status, list) = send(&app, test::TestRequest::get().uri("/api/posts")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list, json!([]));
    }

    #[actix_web::test]
    async fn test_comment_add_and_delete() {
        let app = app().await;
        let (al, _) = register_and_login(&app, "Al", "a@a.com").await;

        let (_, post) = send(
            &app,
            authed(test::TestRequest::post().uri("/api/posts"), &al)
                .set_json(json!({ "text": "Post that gets comments" })),
        )
        .await;
        let post_id = post["_id"].as_str().unwrap_or_default().to_string();

        let (status, body) = send(
            &app,
            authed(test::TestRequest::post().uri(&format!("/api/posts/comment/{}", post_id)), &al)
                .set_json(json!({ "text": "short" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.get("text").is_some());

        let (status, commented) = send(
            &app,
            authed(test::TestRequest::post().uri(&format!("/api/posts/comment/{}", post_id)), &al)
                .set_json(json!({ "text": "A long enough comment" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let comment_id = commented["comments"][0]["_id"].as_str().unwrap_or_default().to_string();

        let (status, after) = send(
            &app,
            authed(
                test::TestRequest::delete().uri(&format!("/api/posts/comment/{}/{}", post_id, comment_id)),
                &al,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(after["comments"], json!([]));
    }
}
