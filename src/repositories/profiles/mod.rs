//! 프로필 리포지토리
//!
//! `profiles` 컬렉션. `user` 와 `handle` 은 각각 유니크합니다.
//! 프로필 upsert 의 갱신 경로는 [`ProfileUpdate`] 값 하나로 표현되어
//! MongoDB 에서는 `$set` 문서로, 메모리 저장소에서는 필드 대입으로 적용됩니다.

pub mod memory;
pub mod profile_repo;

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, Document};

use crate::domain::entities::profiles::profile::{Profile, SocialLinks};
use crate::errors::{AppError, AppResult, ErrorContext, FieldErrors};

pub use memory::MemoryProfileRepository;
pub use profile_repo::MongoProfileRepository;

/// 한 사용자에게 두 번째 프로필을 만들려 할 때
pub(crate) fn duplicate_owner() -> AppError {
    AppError::ConflictError(FieldErrors::single("profile", "Profile already exists for this user"))
}

/// 다른 프로필이 이미 쓰는 핸들
pub(crate) fn duplicate_handle() -> AppError {
    AppError::ConflictError(FieldErrors::single("handle", "That handle already exists"))
}

/// 프로필 부분 갱신
///
/// `None` 인 필드는 건드리지 않습니다. `social` 은 항상 통째로 교체됩니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub handle: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub githubusername: Option<String>,
    pub skills: Option<Vec<String>>,
    pub social: SocialLinks,
}

impl ProfileUpdate {
    pub fn apply_to(&self, profile: &mut Profile) {
        if let Some(handle) = &self.handle {
            profile.handle = handle.clone();
        }
        if let Some(status) = &self.status {
            profile.status = status.clone();
        }
        if let Some(skills) = &self.skills {
            profile.skills = skills.clone();
        }

        let optional_fields = [
            (&mut profile.company, &self.company),
            (&mut profile.website, &self.website),
            (&mut profile.location, &self.location),
            (&mut profile.bio, &self.bio),
            (&mut profile.githubusername, &self.githubusername),
        ];
        for (target, value) in optional_fields {
            if value.is_some() {
                *target = value.clone();
            }
        }

        profile.social = self.social.clone();
    }

    /// 새 프로필을 만듭니다. 핸들/상태는 검증을 통과한 값이 들어옵니다.
    pub fn into_profile(self, user: ObjectId) -> Profile {
        let mut profile = Profile::new(
            user,
            self.handle.clone().unwrap_or_default(),
            self.status.clone().unwrap_or_default(),
        );
        self.apply_to(&mut profile);
        profile
    }

    pub fn to_set_document(&self) -> AppResult<Document> {
        let mut set = Document::new();

        let string_fields = [
            ("handle", &self.handle),
            ("company", &self.company),
            ("website", &self.website),
            ("location", &self.location),
            ("bio", &self.bio),
            ("status", &self.status),
            ("githubusername", &self.githubusername),
        ];
        for (field, value) in string_fields {
            if let Some(value) = value {
                set.insert(field, value.clone());
            }
        }

        if let Some(skills) = &self.skills {
            set.insert("skills", skills.clone());
        }

        let social = mongodb::bson::to_bson(&self.social).context("social 직렬화 실패")?;
        set.insert("social", social);

        Ok(doc! { "$set": set })
    }
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user(&self, user: &ObjectId) -> AppResult<Option<Profile>>;

    async fn find_by_handle(&self, handle: &str) -> AppResult<Option<Profile>>;

    async fn find_all(&self) -> AppResult<Vec<Profile>>;

    async fn create(&self, profile: Profile) -> AppResult<Profile>;

    /// 갱신 후 문서를 돌려줍니다. 프로필이 없으면 `None`.
    async fn update_fields(&self, user: &ObjectId, update: &ProfileUpdate) -> AppResult<Option<Profile>>;

    /// 경력/학력 배열만 저장합니다.
    async fn save_entries(&self, profile: &Profile) -> AppResult<()>;

    async fn delete_by_user(&self, user: &ObjectId) -> AppResult<bool>;

    async fn create_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}
