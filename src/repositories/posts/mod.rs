//! 게시물 리포지토리
//!
//! `posts` 컬렉션. 목록은 작성 시각 내림차순입니다.

pub mod memory;
pub mod post_repo;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::posts::post::Post;
use crate::errors::AppResult;

pub use memory::MemoryPostRepository;
pub use post_repo::MongoPostRepository;

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// 최신 글이 먼저 옵니다.
    async fn find_all(&self) -> AppResult<Vec<Post>>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Post>>;

    async fn create(&self, post: Post) -> AppResult<Post>;

    /// 좋아요/댓글 배열만 저장합니다.
    async fn save_engagement(&self, post: &Post) -> AppResult<()>;

    async fn delete(&self, id: &ObjectId) -> AppResult<bool>;

    async fn create_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}
