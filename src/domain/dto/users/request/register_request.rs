use serde::{Deserialize, Serialize};

/// `POST /api/users/register` 본문
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// 비밀번호 확인
    pub password2: Option<String>,
}
