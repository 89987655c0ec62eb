//! `profiles` 컬렉션 문서와 내장 하위 문서
//!
//! 사용자당 프로필은 하나이며 (`user` 유니크), `handle` 역시 유니크합니다.
//! 경력/학력 항목은 가장 최근에 추가한 것이 맨 앞에 오도록 저장됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 소셜 링크. 각 필드는 선택이며 값이 있으면 URL 입니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// 경력 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// 학력 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user: ObjectId,
    pub handle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub status: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub githubusername: Option<String>,
    #[serde(default)]
    pub social: SocialLinks,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    pub date: DateTime,
}

impl Profile {
    pub fn new(user: ObjectId, handle: String, status: String) -> Self {
        Self {
            id: ObjectId::new(),
            user,
            handle,
            company: None,
            website: None,
            location: None,
            status,
            skills: Vec::new(),
            bio: None,
            githubusername: None,
            social: SocialLinks::default(),
            experience: Vec::new(),
            education: Vec::new(),
            date: DateTime::now(),
        }
    }

    pub fn add_experience(&mut self, entry: Experience) {
        self.experience.insert(0, entry);
    }

    /// 16진 문자열 식별자가 일치하는 경력 항목을 떼어냅니다.
    pub fn remove_experience(&mut self, entry_id: &str) -> Option<Experience> {
        let index = self
            .experience
            .iter()
            .position(|entry| entry.id.to_hex() == entry_id)?;
        Some(self.experience.remove(index))
    }

    pub fn add_education(&mut self, entry: Education) {
        self.education.insert(0, entry);
    }

    pub fn remove_education(&mut self, entry_id: &str) -> Option<Education> {
        let index = self
            .education
            .iter()
            .position(|entry| entry.id.to_hex() == entry_id)?;
        Some(self.education.remove(index))
    }
}
