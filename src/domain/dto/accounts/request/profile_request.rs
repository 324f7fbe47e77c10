//! 인증된 계정의 비밀번호/프로필 변경 요청 DTO

use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::deserialize_optional_string;
use crate::utils::validation::{first_error_message, validation_error};
use super::register_request::MIN_PASSWORD_LENGTH;

pub(crate) const NEW_PASSWORD_REQUIRED: &str = "New password is required";
pub(crate) const NEW_PASSWORD_TOO_SHORT: &str = "New password must be at least 8 characters long";
pub(crate) const USERNAME_REQUIRED: &str = "Username is required";
pub(crate) const USERNAME_TOO_SHORT: &str = "Username must be at least 2 characters long";

/// 사용자명 최소 길이 (문자 수)
pub const MIN_USERNAME_LENGTH: usize = 2;

fn validate_replacement_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(validation_error("required", NEW_PASSWORD_REQUIRED));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(validation_error("length", NEW_PASSWORD_TOO_SHORT));
    }
    Ok(())
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.chars().count() < MIN_USERNAME_LENGTH {
        return Err(validation_error("length", USERNAME_TOO_SHORT));
    }
    Ok(())
}

/// `PUT /api/auth/change-password` 요청 본문
///
/// 비밀번호가 없는 소셜 계정은 `current_password` 없이 새 비밀번호를 설정합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub current_password: Option<String>,

    #[validate(required(message = "New password is required"), custom(function = "validate_replacement_password"))]
    pub new_password: Option<String>,
}

/// 검증을 통과한 비밀번호 변경 입력
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordChangeInput {
    /// 빈 문자열은 없는 것으로 취급
    pub current_password: Option<String>,
    pub new_password: String,
}

impl ChangePasswordRequest {
    pub fn into_input(self) -> AppResult<PasswordChangeInput> {
        self.validate()
            .map_err(|e| AppError::ValidationError(first_error_message(&e, &["new_password"])))?;

        let new_password = self
            .new_password
            .ok_or_else(|| AppError::ValidationError(NEW_PASSWORD_REQUIRED.to_string()))?;

        Ok(PasswordChangeInput {
            current_password: self.current_password.filter(|p| !p.is_empty()),
            new_password,
        })
    }
}

/// `PUT /api/auth/profile` 요청 본문
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// 앞뒤 공백은 제거되며, 공백뿐이면 지정하지 않은 것으로 취급
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "Username is required"), custom(function = "validate_username"))]
    pub username: Option<String>,
}

/// 검증을 통과한 프로필 변경 입력
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileUpdateInput {
    pub username: String,
}

impl UpdateProfileRequest {
    pub fn into_input(self) -> AppResult<ProfileUpdateInput> {
        self.validate()
            .map_err(|e| AppError::ValidationError(first_error_message(&e, &["username"])))?;

        self.username
            .map(|username| ProfileUpdateInput { username })
            .ok_or_else(|| AppError::ValidationError(USERNAME_REQUIRED.to_string()))
    }
}
