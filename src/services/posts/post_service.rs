//! 게시물 서비스
//!
//! 게시물 CRUD, 좋아요/취소, 댓글 작성/삭제. 좋아요와 댓글 변경은 게시물
//! 전체를 읽어 수정한 뒤 `save_engagement` 로 내장 배열만 다시 씁니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::domain::dto::posts::request::PostRequest;
use crate::domain::dto::posts::response::PostResponse;
use crate::domain::entities::posts::post::{Comment, Post};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, AppResult, FieldErrors};
use crate::repositories::{PostRepository, ProfileRepository};
use crate::services::parse_object_id;
use crate::utils::string_utils::non_empty;

pub struct PostService {
    post_repo: Arc<dyn PostRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
}

impl PostService {
    pub fn new(post_repo: Arc<dyn PostRepository>, profile_repo: Arc<dyn ProfileRepository>) -> Self {
        Self {
            post_repo,
            profile_repo,
        }
    }

    /// 최신순. 조회 실패는 `{nopostfound: "No posts found"}` 입니다.
    pub async fn list(&self) -> AppResult<Vec<PostResponse>> {
        let posts = self.post_repo.find_all().await.map_err(|e| {
            log::error!("게시물 목록 조회 실패: {}", e);
            AppError::BadRequest(FieldErrors::single("nopostfound", "No posts found"))
        })?;

        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    pub async fn get(&self, id: &str) -> AppResult<PostResponse> {
        let not_found = || AppError::BadRequest(FieldErrors::single("nopostfound", "No post found with that Id"));

        let post_id = parse_object_id(id).ok_or_else(not_found)?;
        let post = self.post_repo.find_by_id(&post_id).await?.ok_or_else(not_found)?;

        Ok(PostResponse::from(post))
    }

    /// 표시 이름과 아바타는 요청 본문 값을 그대로 저장합니다.
    pub async fn create(&self, user: &AuthenticatedUser, request: PostRequest) -> AppResult<PostResponse> {
        let post = Post::new(
            user.id,
            request.text.unwrap_or_default(),
            non_empty(request.name.as_deref()),
            non_empty(request.avatar.as_deref()),
        );

        let created = self.post_repo.create(post).await?;
        log::info!("게시물 생성: {} by {}", created.id.to_hex(), user.id_string());

        Ok(PostResponse::from(created))
    }

    /// 작성자만 삭제할 수 있습니다. 거절된 경우 게시물은 그대로 남습니다.
    pub async fn delete(&self, user: &AuthenticatedUser, id: &str) -> AppResult<()> {
        self.require_profile(user).await?;
        let post = self.find_post(id).await?;

        if !post.is_authored_by(&user.id) {
            log::warn!("작성자가 아닌 삭제 시도: post={} user={}", post.id.to_hex(), user.id_string());
            return Err(AppError::AuthorizationError(FieldErrors::single(
                "notauthorised",
                "User not authorized!",
            )));
        }

        self.post_repo.delete(&post.id).await?;
        log::info!("게시물 삭제: {}", post.id.to_hex());
        Ok(())
    }

    pub async fn like(&self, user: &AuthenticatedUser, id: &str) -> AppResult<PostResponse> {
        self.require_profile(user).await?;
        let mut post = self.find_post(id).await?;

        if !post.add_like(user.id) {
            return Err(AppError::BadRequest(FieldErrors::single(
                "alreadyliked",
                "User already liked this post",
            )));
        }

        self.post_repo.save_engagement(&post).await?;
        Ok(PostResponse::from(post))
    }

    pub async fn unlike(&self, user: &AuthenticatedUser, id: &str) -> AppResult<PostResponse> {
        self.require_profile(user).await?;
        let mut post = self.find_post(id).await?;

        if post.remove_like(&user.id).is_none() {
            return Err(AppError::BadRequest(FieldErrors::single(
                "alreadyliked",
                "You have not yet liked this post",
            )));
        }

        self.post_repo.save_engagement(&post).await?;
        Ok(PostResponse::from(post))
    }

    pub async fn comment(&self, user: &AuthenticatedUser, id: &str, request: PostRequest) -> AppResult<PostResponse> {
        let mut post = self.find_post(id).await?;

        post.add_comment(Comment::new(
            user.id,
            request.text.unwrap_or_default(),
            non_empty(request.name.as_deref()),
            non_empty(request.avatar.as_deref()),
        ));

        self.post_repo.save_engagement(&post).await?;
        Ok(PostResponse::from(post))
    }

    /// 요청자가 이 게시물에 댓글을 하나라도 남겼어야 하며, 지정한 댓글이
    /// 있어야 합니다. 댓글 작성자가 누구인지는 따로 확인하지 않습니다.
    pub async fn delete_comment(&self, user: &AuthenticatedUser, id: &str, comment_id: &str) -> AppResult<PostResponse> {
        let mut post = self.find_post(id).await?;
        let missing = || AppError::BadRequest(FieldErrors::single("commentnotexist", "Comment does not exist"));

        if !post.has_comment_by(&user.id) {
            return Err(missing());
        }
        post.remove_comment(comment_id).ok_or_else(missing)?;

        self.post_repo.save_engagement(&post).await?;
        Ok(PostResponse::from(post))
    }

    async fn find_post(&self, id: &str) -> AppResult<Post> {
        let missing = || AppError::BadRequest(FieldErrors::single("post", "Post with this Id does not exist!"));

        let post_id: ObjectId = parse_object_id(id).ok_or_else(missing)?;
        self.post_repo.find_by_id(&post_id).await?.ok_or_else(missing)
    }

    async fn require_profile(&self, user: &AuthenticatedUser) -> AppResult<()> {
        match self.profile_repo.find_by_user(&user.id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::BadRequest(FieldErrors::single(
                "profile",
                "There is no profile for this user id",
            ))),
        }
    }
}
