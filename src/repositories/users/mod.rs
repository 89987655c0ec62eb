//! 계정 리포지토리
//!
//! `users` 컬렉션. 이메일은 유니크합니다.

pub mod memory;
pub mod user_repo;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::users::user::User;
use crate::errors::AppResult;

pub use memory::MemoryUserRepository;
pub use user_repo::MongoUserRepository;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    /// 프로필 목록의 소유자를 한 번에 채우기 위한 조회
    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<User>>;

    async fn create(&self, user: User) -> AppResult<User>;

    async fn delete(&self, id: &ObjectId) -> AppResult<bool>;

    async fn create_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}
