use serde::{Deserialize, Serialize};

/// `POST /api/users/login` 본문
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}
