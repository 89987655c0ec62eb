use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::dto::to_chrono;
use crate::domain::entities::profiles::profile::{Education, Experience, Profile, SocialLinks};
use crate::domain::entities::users::user::User;

/// 프로필 조회 시 채워 넣는 소유자 요약
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub avatar: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id_string(),
            name: user.name.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

/// 채워진 소유자 또는 식별자 문자열
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileOwner {
    Populated(UserSummary),
    Reference(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<Experience> for ExperienceResponse {
    fn from(entry: Experience) -> Self {
        Self {
            id: entry.id.to_hex(),
            title: entry.title,
            company: entry.company,
            location: entry.location,
            from: entry.from,
            to: entry.to,
            current: entry.current,
            description: entry.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<Education> for EducationResponse {
    fn from(entry: Education) -> Self {
        Self {
            id: entry.id.to_hex(),
            school: entry.school,
            degree: entry.degree,
            fieldofstudy: entry.fieldofstudy,
            from: entry.from,
            to: entry.to,
            current: entry.current,
            description: entry.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: ProfileOwner,
    pub handle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub githubusername: Option<String>,
    pub social: SocialLinks,
    pub experience: Vec<ExperienceResponse>,
    pub education: Vec<EducationResponse>,
    pub date: DateTime<Utc>,
}

impl ProfileResponse {
    /// 소유자 문서를 채워 넣은 조회용 응답. 소유자가 없으면 식별자만 남깁니다.
    pub fn populated(profile: Profile, owner: Option<&User>) -> Self {
        let user = match owner {
            Some(user) => ProfileOwner::Populated(UserSummary::from(user)),
            None => ProfileOwner::Reference(profile.user.to_hex()),
        };
        Self::build(profile, user)
    }

    fn build(profile: Profile, user: ProfileOwner) -> Self {
        Self {
            id: profile.id.to_hex(),
            user,
            handle: profile.handle,
            company: profile.company,
            website: profile.website,
            location: profile.location,
            status: profile.status,
            skills: profile.skills,
            bio: profile.bio,
            githubusername: profile.githubusername,
            social: profile.social,
            experience: profile.experience.into_iter().map(ExperienceResponse::from).collect(),
            education: profile.education.into_iter().map(EducationResponse::from).collect(),
            date: to_chrono(profile.date),
        }
    }
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        let user = ProfileOwner::Reference(profile.user.to_hex());
        Self::build(profile, user)
    }
}
