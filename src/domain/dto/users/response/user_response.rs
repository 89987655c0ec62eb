use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::dto::to_chrono;
use crate::domain::entities::users::user::User;
use crate::domain::models::auth::AuthenticatedUser;

/// 회원가입 결과
///
/// 저장된 문서를 그대로 돌려주므로 비밀번호 해시가 포함됩니다.
/// 기존 클라이언트가 이 형태에 의존하고 있어 유지합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub password: String,
    pub date: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            password,
            avatar,
            date,
        } = user;

        Self {
            id: id.to_hex(),
            name,
            email,
            avatar,
            password,
            date: to_chrono(date),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    /// `"Bearer " + 서명된 토큰`
    pub token: String,
}

impl LoginResponse {
    pub fn bearer(token: &str) -> Self {
        Self {
            success: true,
            token: format!("Bearer {}", token),
        }
    }
}

/// `GET /api/users/current`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&AuthenticatedUser> for CurrentUserResponse {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            id: user.id_string(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}
