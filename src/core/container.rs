//! 서비스 컨테이너
//!
//! 저장소 백엔드(MongoDB 또는 메모리)를 선택해 세 서비스를 한 번 만들고,
//! 워커마다 같은 인스턴스를 `web::Data` 로 공유합니다.

use std::sync::Arc;

use actix_web::web;

use crate::db::Database;
use crate::errors::AppResult;
use crate::repositories::{
    MemoryPostRepository, MemoryProfileRepository, MemoryUserRepository, MongoPostRepository,
    MongoProfileRepository, MongoUserRepository, PostRepository, ProfileRepository, UserRepository,
};
use crate::services::auth::{PasswordService, TokenService};
use crate::services::{PostService, ProfileService, UserService};

#[derive(Clone)]
pub struct AppContainer {
    pub user_service: web::Data<UserService>,
    pub profile_service: web::Data<ProfileService>,
    pub post_service: web::Data<PostService>,
}

impl AppContainer {
    /// 저장소 구현을 받아 서비스 그래프를 조립합니다.
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        post_repo: Arc<dyn PostRepository>,
        passwords: PasswordService,
        tokens: TokenService,
    ) -> Self {
        Self {
            user_service: web::Data::new(UserService::new(user_repo.clone(), passwords, tokens)),
            profile_service: web::Data::new(ProfileService::new(profile_repo.clone(), user_repo)),
            post_service: web::Data::new(PostService::new(post_repo, profile_repo)),
        }
    }

    /// MongoDB 저장소로 조립하고 인덱스를 보장합니다.
    pub async fn with_mongo(database: &Database) -> AppResult<Self> {
        let user_repo = Arc::new(MongoUserRepository::new(database));
        let profile_repo = Arc::new(MongoProfileRepository::new(database));
        let post_repo = Arc::new(MongoPostRepository::new(database));

        user_repo.create_indexes().await?;
        profile_repo.create_indexes().await?;
        post_repo.create_indexes().await?;
        log::info!("✅ 컬렉션 인덱스 준비 완료");

        Ok(Self::new(
            user_repo,
            profile_repo,
            post_repo,
            PasswordService::from_env(),
            TokenService::from_env(),
        ))
    }

    /// 프로세스 메모리 저장소로 조립합니다. 재시작하면 데이터가 사라집니다.
    pub fn in_memory(passwords: PasswordService, tokens: TokenService) -> Self {
        Self::new(
            Arc::new(MemoryUserRepository::new()),
            Arc::new(MemoryProfileRepository::new()),
            Arc::new(MemoryPostRepository::new()),
            passwords,
            tokens,
        )
    }

    /// 서비스들을 앱 데이터로 등록합니다.
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.user_service.clone())
            .app_data(self.profile_service.clone())
            .app_data(self.post_service.clone());
    }
}
