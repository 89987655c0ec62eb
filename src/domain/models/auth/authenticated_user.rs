//! 요청 컨텍스트에 부착되는 인증 사용자
//!
//! [`crate::middlewares::AuthMiddleware`] 가 토큰을 검증하고 저장된 사용자를
//! 찾아 request extensions 에 넣어 두면, 핸들러는 이 타입을 인자로 받아 꺼내 씁니다.

use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::users::user::User;
use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    pub avatar: String,
}

impl AuthenticatedUser {
    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string(),
            ))),
        }
    }
}
