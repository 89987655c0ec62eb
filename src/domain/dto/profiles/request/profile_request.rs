use serde::{Deserialize, Serialize};

/// `POST /api/profile` 본문
///
/// `skills` 는 쉼표로 구분된 한 줄 문자열이고, 소셜 링크는 최상위 필드로
/// 평탄하게 전달됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileRequest {
    pub handle: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub githubusername: Option<String>,
    pub skills: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}
