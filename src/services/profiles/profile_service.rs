//! 프로필 서비스
//!
//! 프로필 조회(소유자 채움), upsert, 경력/학력 항목 관리, 계정 삭제를
//! 담당합니다. 모든 변경은 현재 사용자 기준이며 존재 확인이 먼저 옵니다.

use std::collections::HashMap;
use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::domain::dto::profiles::request::{EducationRequest, ExperienceRequest, ProfileRequest};
use crate::domain::dto::profiles::response::ProfileResponse;
use crate::domain::entities::profiles::profile::{Education, Experience, Profile, SocialLinks};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, AppResult, FieldErrors};
use crate::repositories::{ProfileRepository, ProfileUpdate, UserRepository};
use crate::services::parse_object_id;
use crate::utils::string_utils::{non_empty, split_comma_list};

const NO_PROFILE: &str = "There is no profile for this user";

pub struct ProfileService {
    profile_repo: Arc<dyn ProfileRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl ProfileService {
    pub fn new(profile_repo: Arc<dyn ProfileRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            profile_repo,
            user_repo,
        }
    }

    pub async fn get_current(&self, user: &AuthenticatedUser) -> AppResult<ProfileResponse> {
        let profile = self
            .profile_repo
            .find_by_user(&user.id)
            .await?
            .ok_or_else(|| AppError::NotFound(FieldErrors::single("noprofile", NO_PROFILE)))?;

        self.populate(profile).await
    }

    pub async fn get_by_handle(&self, handle: &str) -> AppResult<ProfileResponse> {
        let profile = self
            .profile_repo
            .find_by_handle(handle)
            .await?
            .ok_or_else(|| AppError::NotFound(FieldErrors::single("noprofile", NO_PROFILE)))?;

        self.populate(profile).await
    }

    /// 형식이 틀린 식별자와 없는 사용자는 같은 `{noprofile}` 404 로 응답합니다.
    pub async fn get_by_user_id(&self, user_id: &str) -> AppResult<ProfileResponse> {
        let missing = || AppError::NotFound(FieldErrors::single("noprofile", NO_PROFILE));

        let owner = parse_object_id(user_id).ok_or_else(missing)?;
        let profile = self.profile_repo.find_by_user(&owner).await?.ok_or_else(missing)?;

        self.populate(profile).await
    }

    /// 비어 있거나 조회에 실패하면 404 입니다.
    pub async fn get_all(&self) -> AppResult<Vec<ProfileResponse>> {
        let profiles = self.profile_repo.find_all().await.map_err(|e| {
            log::error!("프로필 목록 조회 실패: {}", e);
            AppError::NotFound(FieldErrors::single("profile", "There are no profiles"))
        })?;

        if profiles.is_empty() {
            return Err(AppError::NotFound(FieldErrors::single(
                "noprofile",
                "There are no profiles",
            )));
        }

        let owner_ids: Vec<ObjectId> = profiles.iter().map(|profile| profile.user).collect();
        let owners: HashMap<ObjectId, _> = self
            .user_repo
            .find_by_ids(&owner_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        Ok(profiles
            .into_iter()
            .map(|profile| {
                let owner = owners.get(&profile.user);
                ProfileResponse::populated(profile, owner)
            })
            .collect())
    }

    /// 프로필이 있으면 제공된 필드만 갱신하고, 없으면 새로 만듭니다.
    ///
    /// 다른 사용자가 이미 쓰는 핸들은 `{handle: "That handle already exists"}` 로 거절합니다.
    pub async fn upsert(&self, user: &AuthenticatedUser, request: ProfileRequest) -> AppResult<ProfileResponse> {
        let update = Self::build_update(&request);

        if let Some(handle) = &update.handle {
            if let Some(owner) = self.profile_repo.find_by_handle(handle).await? {
                if owner.user != user.id {
                    return Err(AppError::ConflictError(FieldErrors::single(
                        "handle",
                        "That handle already exists",
                    )));
                }
            }
        }

        match self.profile_repo.find_by_user(&user.id).await? {
            Some(_) => {
                let updated = self
                    .profile_repo
                    .update_fields(&user.id, &update)
                    .await?
                    .ok_or_else(|| AppError::BadRequest(FieldErrors::single("noprofile", NO_PROFILE)))?;

                log::info!("프로필 갱신: {}", user.id_string());
                Ok(ProfileResponse::from(updated))
            }
            None => {
                let created = self.profile_repo.create(update.into_profile(user.id)).await?;

                log::info!("프로필 생성: {} ({})", user.id_string(), created.handle);
                Ok(ProfileResponse::from(created))
            }
        }
    }

    pub async fn add_experience(&self, user: &AuthenticatedUser, request: ExperienceRequest) -> AppResult<ProfileResponse> {
        let mut profile = self.require_profile(user).await?;

        profile.add_experience(Experience {
            id: ObjectId::new(),
            title: request.title.unwrap_or_default(),
            company: request.company.unwrap_or_default(),
            location: non_empty(request.location.as_deref()),
            from: request.from.unwrap_or_default(),
            to: non_empty(request.to.as_deref()),
            current: request.current.unwrap_or(false),
            description: non_empty(request.description.as_deref()),
        });

        self.profile_repo.save_entries(&profile).await?;
        Ok(ProfileResponse::from(profile))
    }

    pub async fn add_education(&self, user: &AuthenticatedUser, request: EducationRequest) -> AppResult<ProfileResponse> {
        let mut profile = self.require_profile(user).await?;

        profile.add_education(Education {
            id: ObjectId::new(),
            school: request.school.unwrap_or_default(),
            degree: request.degree.unwrap_or_default(),
            fieldofstudy: request.fieldofstudy.unwrap_or_default(),
            from: request.from.unwrap_or_default(),
            to: non_empty(request.to.as_deref()),
            current: request.current.unwrap_or(false),
            description: non_empty(request.description.as_deref()),
        });

        self.profile_repo.save_entries(&profile).await?;
        Ok(ProfileResponse::from(profile))
    }

    pub async fn delete_experience(&self, user: &AuthenticatedUser, exp_id: &str) -> AppResult<ProfileResponse> {
        let mut profile = self.require_profile(user).await?;

        profile.remove_experience(exp_id).ok_or_else(|| {
            AppError::BadRequest(FieldErrors::single("noexperience", "Experience does not exist"))
        })?;

        self.profile_repo.save_entries(&profile).await?;
        Ok(ProfileResponse::from(profile))
    }

    pub async fn delete_education(&self, user: &AuthenticatedUser, edu_id: &str) -> AppResult<ProfileResponse> {
        let mut profile = self.require_profile(user).await?;

        profile.remove_education(edu_id).ok_or_else(|| {
            AppError::BadRequest(FieldErrors::single("noeducation", "Education does not exist"))
        })?;

        self.profile_repo.save_entries(&profile).await?;
        Ok(ProfileResponse::from(profile))
    }

    /// 프로필을 먼저 지우고 계정을 지웁니다.
    pub async fn delete_account(&self, user: &AuthenticatedUser) -> AppResult<()> {
        self.profile_repo.delete_by_user(&user.id).await?;
        self.user_repo.delete(&user.id).await?;

        log::info!("계정 삭제: {}", user.id_string());
        Ok(())
    }

    async fn require_profile(&self, user: &AuthenticatedUser) -> AppResult<Profile> {
        self.profile_repo
            .find_by_user(&user.id)
            .await?
            .ok_or_else(|| AppError::BadRequest(FieldErrors::single("noprofile", NO_PROFILE)))
    }

    async fn populate(&self, profile: Profile) -> AppResult<ProfileResponse> {
        let owner = self.user_repo.find_by_id(&profile.user).await?;
        Ok(ProfileResponse::populated(profile, owner.as_ref()))
    }

    fn build_update(request: &ProfileRequest) -> ProfileUpdate {
        ProfileUpdate {
            handle: non_empty(request.handle.as_deref()),
            company: non_empty(request.company.as_deref()),
            website: non_empty(request.website.as_deref()),
            location: non_empty(request.location.as_deref()),
            bio: non_empty(request.bio.as_deref()),
            status: non_empty(request.status.as_deref()),
            githubusername: non_empty(request.githubusername.as_deref()),
            skills: request.skills.as_deref().map(split_comma_list),
            social: SocialLinks {
                youtube: non_empty(request.youtube.as_deref()),
                twitter: non_empty(request.twitter.as_deref()),
                facebook: non_empty(request.facebook.as_deref()),
                linkedin: non_empty(request.linkedin.as_deref()),
                instagram: non_empty(request.instagram.as_deref()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::profiles::response::ProfileOwner;
    use crate::domain::entities::users::user::User;
    use crate::repositories::{MemoryProfileRepository, MemoryUserRepository};

    struct Fixture {
        service: ProfileService,
        users: Arc<MemoryUserRepository>,
    }

    fn fixture() -> Fixture {
        let users = Arc::new(MemoryUserRepository::new());
        let service = ProfileService::new(Arc::new(MemoryProfileRepository::new()), users.clone());
        Fixture { service, users }
    }

    async fn member(fixture: &Fixture, email: &str) -> AuthenticatedUser {
        let user = User::new("Al".into(), email.into(), "hash".into(), "//avatar".into());
        let created = fixture.users.create(user).await.unwrap();
        AuthenticatedUser::from(&created)
    }

    fn profile_request(handle: &str) -> ProfileRequest {
        ProfileRequest {
            handle: Some(handle.into()),
            status: Some("Developer".into()),
            skills: Some("rust, go".into()),
            ..Default::default()
        }
    }

    #[actix_web::test]
    async fn test_upsert_creates_then_updates() {
        let fixture = fixture();
        let al = member(&fixture, "a@a.com").await;

        let created = fixture.service.upsert(&al, profile_request("al")).await.unwrap();
        assert_eq!(created.skills, vec!["rust".to_string(), " go".to_string()]);
        assert_eq!(created.user, ProfileOwner::Reference(al.id_string()));

        let mut change = profile_request("al");
        change.company = Some("Acme".into());
        let updated = fixture.service.upsert(&al, change).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.company.as_deref(), Some("Acme"));
    }

    #[actix_web::test]
    async fn test_handle_taken_by_another_user() {
        let fixture = fixture();
        let al = member(&fixture, "a@a.com").await;
        let bo = member(&fixture, "b@a.com").await;
        fixture.service.upsert(&al, profile_request("dev")).await.unwrap();

        let result = fixture.service.upsert(&bo, profile_request("dev")).await;

        assert!(matches!(result, Err(AppError::ConflictError(ref e)) if e.get("handle") == Some("That handle already exists")));
    }

    #[actix_web::test]
    async fn test_lookup_populates_owner() {
        let fixture = fixture();
        let al = member(&fixture, "a@a.com").await;
        fixture.service.upsert(&al, profile_request("al")).await.unwrap();

        let by_handle = fixture.service.get_by_handle("al").await.unwrap();
        match by_handle.user {
            ProfileOwner::Populated(summary) => assert_eq!(summary.name, "Al"),
            other => panic!("expected populated owner, got {:?}", other),
        }

        assert!(fixture.service.get_by_user_id(&al.id_string()).await.is_ok());
    }

    #[actix_web::test]
    async fn test_unknown_and_malformed_user_id_share_error() {
        let fixture = fixture();
        let unknown = ObjectId::new().to_hex();

        for id in ["not-an-id", unknown.as_str()] {
            let result = fixture.service.get_by_user_id(id).await;
            assert!(matches!(result, Err(AppError::NotFound(ref e)) if e.get("noprofile") == Some(NO_PROFILE) && e.len() == 1));
        }
    }

    #[actix_web::test]
    async fn test_get_all_empty_is_not_found() {
        let fixture = fixture();

        let result = fixture.service.get_all().await;

        assert!(matches!(result, Err(AppError::NotFound(ref e)) if e.get("noprofile") == Some("There are no profiles")));
    }

    #[actix_web::test]
    async fn test_education_requires_profile() {
        let fixture = fixture();
        let al = member(&fixture, "a@a.com").await;

        let result = fixture
            .service
            .add_education(
                &al,
                EducationRequest {
                    school: Some("MIT".into()),
                    degree: Some("BSc".into()),
                    fieldofstudy: Some("CS".into()),
                    from: Some("2015-09-01".into()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(ref e)) if e.contains("noprofile")));
    }

    #[actix_web::test]
    async fn test_education_delete_uses_education_id() {
        let fixture = fixture();
        let al = member(&fixture, "a@a.com").await;
        fixture.service.upsert(&al, profile_request("al")).await.unwrap();

        let with_entry = fixture
            .service
            .add_education(
                &al,
                EducationRequest {
                    school: Some("MIT".into()),
                    degree: Some("BSc".into()),
                    fieldofstudy: Some("CS".into()),
                    from: Some("2015-09-01".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let edu_id = with_entry.education[0].id.clone();

        let after = fixture.service.delete_education(&al, &edu_id).await.unwrap();
        assert!(after.education.is_empty());

        let again = fixture.service.delete_education(&al, &edu_id).await;
        assert!(matches!(again, Err(AppError::BadRequest(_))));
    }

    #[actix_web::test]
    async fn test_delete_account_removes_profile_and_user() {
        let fixture = fixture();
        let al = member(&fixture, "a@a.com").await;
        fixture.service.upsert(&al, profile_request("al")).await.unwrap();

        fixture.service.delete_account(&al).await.unwrap();

        assert!(fixture.users.find_by_id(&al.id).await.unwrap().is_none());
        assert!(matches!(fixture.service.get_by_handle("al").await, Err(AppError::NotFound(_))));
    }
}
