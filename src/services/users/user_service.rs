use std::sync::Arc;

use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::domain::dto::users::response::{LoginResponse, UserResponse};
use crate::domain::entities::users::user::User;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, AppResult, FieldErrors};
use crate::repositories::UserRepository;
use crate::services::auth::{PasswordService, TokenService};
use crate::services::parse_object_id;
use crate::utils::gravatar::gravatar_url;

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    passwords: PasswordService,
    tokens: TokenService,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, passwords: PasswordService, tokens: TokenService) -> Self {
        Self {
            user_repo,
            passwords,
            tokens,
        }
    }

    /// 검증을 통과한 가입 요청으로 계정을 만듭니다.
    ///
    /// 이메일이 이미 있으면 `{email: "Email Already Exists!"}` 로 거절하며
    /// 이 경우 아무것도 저장되지 않습니다.
    pub async fn register(&self, request: RegisterRequest) -> AppResult<UserResponse> {
        let start_time = std::time::Instant::now();

        let email = request.email.unwrap_or_default();

        if self.user_repo.find_by_email(&email).await?.is_some() {
            log::info!("중복 이메일로 가입 시도: {}", email);
            return Err(AppError::ConflictError(FieldErrors::single(
                "email",
                "Email Already Exists!",
            )));
        }

        let avatar = gravatar_url(&email);
        let password_hash = self
            .passwords
            .hash_password(&request.password.unwrap_or_default())?;

        let user = User::new(request.name.unwrap_or_default(), email, password_hash, avatar);
        let created = self.user_repo.create(user).await?;

        log::info!(
            "사용자 생성 완료: {} ({:?})",
            created.id_string(),
            start_time.elapsed()
        );

        Ok(UserResponse::from(created))
    }

    /// 이메일/비밀번호를 확인하고 `"Bearer <token>"` 을 돌려줍니다.
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let email = request.email.unwrap_or_default();
        let password = request.password.unwrap_or_default();

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::BadRequest(FieldErrors::single("email", "User not found")))?;

        if !self.passwords.verify_password(&password, &user.password) {
            log::warn!("비밀번호 불일치: {}", user.id_string());
            return Err(AppError::BadRequest(FieldErrors::single(
                "password",
                "Incorrect Password!",
            )));
        }

        let token = self.tokens.issue_token(&user)?;
        log::info!("로그인 성공: {}", user.id_string());

        Ok(LoginResponse::bearer(&token))
    }

    /// 토큰을 검증하고 저장된 사용자를 찾아 요청 신원으로 만듭니다.
    /// 토큰이 가리키는 사용자가 사라졌다면 인증 실패입니다.
    pub async fn resolve_identity(&self, token: &str) -> AppResult<AuthenticatedUser> {
        let claims = self.tokens.verify_token(token)?;

        let user_id = parse_object_id(&claims.id)
            .ok_or_else(|| AppError::AuthenticationError("토큰의 사용자 ID 형식 오류".to_string()))?;

        let user = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| AppError::AuthenticationError(format!("존재하지 않는 사용자: {}", claims.id)))?;

        Ok(AuthenticatedUser::from(&user))
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }
}
