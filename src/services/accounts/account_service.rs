//! # 계정 서비스 구현
//!
//! 이메일/비밀번호 계정의 가입과 로그인, 인증된 계정의 비밀번호/사용자명 변경을 담당합니다.
//!
//! ## 보안 규칙
//!
//! - 비밀번호는 bcrypt 다이제스트로만 저장됩니다.
//! - 로그인 실패는 원인(이메일 없음, 비밀번호 불일치, 비밀번호 없는 계정)과
//!   관계없이 같은 메시지로 응답합니다.
//! - 유니크 검사는 사전 조회로 빠르게 거르고, 경쟁 상황은 저장소 제약이 막습니다.

use std::sync::Arc;
use log::{info, warn};
use crate::{
    domain::{
        dto::accounts::request::{LoginInput, PasswordChangeInput, ProfileUpdateInput, RegistrationInput},
        entities::accounts::{Account, NewAccount},
    },
    errors::{AppError, AppResult},
    repositories::accounts::{AccountStore, EMAIL_TAKEN, USERNAME_TAKEN},
};
use super::password_service::PasswordHasher;

/// 로그인 실패 시 항상 사용되는 메시지
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const CURRENT_PASSWORD_REQUIRED: &str = "Current password is required";
pub const CURRENT_PASSWORD_INCORRECT: &str = "Current password is incorrect";

/// 비밀번호 변경 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordUpdate {
    /// 기존 비밀번호를 교체함
    Changed,
    /// 비밀번호가 없던 소셜 계정에 처음 설정함
    Set,
}

impl PasswordUpdate {
    pub fn message(&self) -> &'static str {
        match self {
            PasswordUpdate::Changed => "Password changed successfully",
            PasswordUpdate::Set => "Password set successfully",
        }
    }
}

pub struct AccountService {
    store: Arc<dyn AccountStore>,
    hasher: PasswordHasher,
}

impl AccountService {
    pub fn new(store: Arc<dyn AccountStore>, hasher: PasswordHasher) -> Self {
        Self { store, hasher }
    }

    /// 새 로컬 계정을 만들고 부여된 ID를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `ConflictError` - 이메일 또는 사용자명 중복
    /// * `StorageError` - 저장소 실패 (계정은 생성되지 않음)
    pub async fn register(&self, input: RegistrationInput) -> AppResult<i64> {
        let start_time = std::time::Instant::now();

        if self.store.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::ConflictError(EMAIL_TAKEN.to_string()));
        }

        if let Some(username) = input.username.as_deref() {
            if self.store.find_by_username(username).await?.is_some() {
                return Err(AppError::ConflictError(USERNAME_TAKEN.to_string()));
            }
        }

        let password_digest = self.hasher.hash(&input.password)?;
        let account = self
            .store
            .create(NewAccount::local(input.email, input.username, password_digest))
            .await?;

        info!("✅ 계정 생성 완료: id={} (took {:?})", account.id, start_time.elapsed());
        Ok(account.id)
    }

    /// 자격 증명을 확인하고 계정을 반환합니다.
    pub async fn login(&self, input: LoginInput) -> AppResult<Account> {
        let account = match self.store.find_by_email(&input.email).await? {
            Some(account) => account,
            None => {
                warn!("로그인 실패: 등록되지 않은 이메일");
                return Err(invalid_credentials());
            }
        };

        let Some(digest) = account.password_digest.as_deref() else {
            warn!("로그인 실패: 비밀번호가 없는 계정 id={}", account.id);
            return Err(invalid_credentials());
        };

        if !self.hasher.verify(&input.password, digest) {
            warn!("로그인 실패: 비밀번호 불일치 id={}", account.id);
            return Err(invalid_credentials());
        }

        info!("로그인 성공: id={}", account.id);
        Ok(account)
    }

    /// 세션 토큰의 주체 계정을 반환합니다.
    ///
    /// 토큰은 유효하지만 계정이 더 이상 없으면 토큰을 무효로 취급합니다.
    pub async fn current_account(&self, id: i64) -> AppResult<Account> {
        self.store.find_by_id(id).await?.ok_or_else(|| {
            warn!("토큰 주체 계정 없음: id={}", id);
            AppError::TokenInvalidError("Invalid token".to_string())
        })
    }

    /// 비밀번호를 변경합니다.
    ///
    /// 비밀번호가 있는 계정은 현재 비밀번호가 일치해야 하고,
    /// 소셜 로그인으로만 만든 계정은 현재 비밀번호 없이 새 비밀번호를 설정합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 현재 비밀번호 누락 또는 불일치
    /// * `TokenInvalidError` - 계정이 더 이상 없음
    /// * `StorageError` - 저장소 실패 (다이제스트는 바뀌지 않음)
    pub async fn change_password(&self, account_id: i64, input: PasswordChangeInput) -> AppResult<PasswordUpdate> {
        let account = self.current_account(account_id).await?;

        let outcome = match account.password_digest.as_deref() {
            Some(digest) => {
                let current = input
                    .current_password
                    .as_deref()
                    .ok_or_else(|| AppError::ValidationError(CURRENT_PASSWORD_REQUIRED.to_string()))?;
                if !self.hasher.verify(current, digest) {
                    warn!("비밀번호 변경 거부: 현재 비밀번호 불일치 id={}", account.id);
                    return Err(AppError::ValidationError(CURRENT_PASSWORD_INCORRECT.to_string()));
                }
                PasswordUpdate::Changed
            }
            None => PasswordUpdate::Set,
        };

        let digest = self.hasher.hash(&input.new_password)?;
        self.store.set_password_digest(account.id, &digest).await?;

        info!("비밀번호 {:?}: id={}", outcome, account.id);
        Ok(outcome)
    }

    /// 사용자명을 변경하고 갱신된 계정을 반환합니다.
    ///
    /// 사전 조회로 중복을 거르고, 동시 변경은 저장소의 유니크 제약이 막습니다.
    pub async fn update_profile(&self, account_id: i64, input: ProfileUpdateInput) -> AppResult<Account> {
        let account = self.current_account(account_id).await?;
        if account.username.as_deref() == Some(input.username.as_str()) {
            return Ok(account);
        }

        if let Some(owner) = self.store.find_by_username(&input.username).await? {
            if owner.id != account.id {
                return Err(AppError::ConflictError(USERNAME_TAKEN.to_string()));
            }
        }

        let updated = self.store.set_username(account.id, &input.username).await?;
        info!("사용자명 변경: id={}", updated.id);
        Ok(updated)
    }
}

fn invalid_credentials() -> AppError {
    AppError::AuthenticationError(INVALID_CREDENTIALS.to_string())
}
