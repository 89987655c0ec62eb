use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::{duplicate_handle, duplicate_owner, ProfileRepository, ProfileUpdate};
use crate::domain::entities::profiles::profile::Profile;
use crate::errors::AppResult;
use crate::repositories::{read_lock, write_lock};

/// 삽입 순서를 유지하는 메모리 저장소
#[derive(Default)]
pub struct MemoryProfileRepository {
    profiles: RwLock<Vec<Profile>>,
}

impl MemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for MemoryProfileRepository {
    async fn find_by_user(&self, user: &ObjectId) -> AppResult<Option<Profile>> {
        Ok(read_lock(&self.profiles)
            .iter()
            .find(|profile| profile.user == *user)
            .cloned())
    }

    async fn find_by_handle(&self, handle: &str) -> AppResult<Option<Profile>> {
        Ok(read_lock(&self.profiles)
            .iter()
            .find(|profile| profile.handle == handle)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Profile>> {
        Ok(read_lock(&self.profiles).clone())
    }

    /// `user` 와 `handle` 유니크 제약을 잠금 안에서 확인합니다.
    async fn create(&self, profile: Profile) -> AppResult<Profile> {
        let mut profiles = write_lock(&self.profiles);

        if profiles.iter().any(|stored| stored.user == profile.user) {
            return Err(duplicate_owner());
        }
        if profiles.iter().any(|stored| stored.handle == profile.handle) {
            return Err(duplicate_handle());
        }

        profiles.push(profile.clone());
        Ok(profile)
    }

    async fn update_fields(&self, user: &ObjectId, update: &ProfileUpdate) -> AppResult<Option<Profile>> {
        let mut profiles = write_lock(&self.profiles);

        if let Some(handle) = &update.handle {
            if profiles
                .iter()
                .any(|stored| stored.user != *user && stored.handle == *handle)
            {
                return Err(duplicate_handle());
            }
        }

        Ok(profiles
            .iter_mut()
            .find(|profile| profile.user == *user)
            .map(|profile| {
                update.apply_to(profile);
                profile.clone()
            }))
    }

    async fn save_entries(&self, profile: &Profile) -> AppResult<()> {
        let mut profiles = write_lock(&self.profiles);

        if let Some(stored) = profiles.iter_mut().find(|stored| stored.id == profile.id) {
            stored.experience = profile.experience.clone();
            stored.education = profile.education.clone();
        }

        Ok(())
    }

    async fn delete_by_user(&self, user: &ObjectId) -> AppResult<bool> {
        let mut profiles = write_lock(&self.profiles);
        let before = profiles.len();
        profiles.retain(|profile| profile.user != *user);
        Ok(profiles.len() < before)
    }
}
