//! 회원가입 요청 DTO

use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::deserialize_optional_string;
use crate::utils::validation::{first_error_message, is_valid_email, validation_error};

pub(crate) const EMAIL_REQUIRED: &str = "Email is required";
pub(crate) const EMAIL_INVALID: &str = "Invalid email format";
pub(crate) const PASSWORD_REQUIRED: &str = "Password is required";
pub(crate) const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long";

/// 비밀번호 최소 길이 (문자 수)
pub const MIN_PASSWORD_LENGTH: usize = 8;

pub(crate) fn validate_email_field(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(validation_error("required", EMAIL_REQUIRED));
    }
    if !is_valid_email(email) {
        return Err(validation_error("email_format", EMAIL_INVALID));
    }
    Ok(())
}

pub(crate) fn validate_password_present(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(validation_error("required", PASSWORD_REQUIRED));
    }
    Ok(())
}

fn validate_new_password(password: &str) -> Result<(), ValidationError> {
    validate_password_present(password)?;
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(validation_error("length", PASSWORD_TOO_SHORT));
    }
    Ok(())
}

/// `POST /api/register` 요청 본문
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(required(message = "Email is required"), custom(function = "validate_email_field"))]
    pub email: Option<String>,

    #[validate(required(message = "Password is required"), custom(function = "validate_new_password"))]
    pub password: Option<String>,

    /// 앞뒤 공백은 제거되며, 공백뿐이면 지정하지 않은 것으로 취급
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub username: Option<String>,
}

/// 검증을 통과한 가입 입력
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationInput {
    pub email: String,
    pub password: String,
    pub username: Option<String>,
}

impl RegisterRequest {
    /// 이메일 → 비밀번호 순서로 검증하고 첫 번째 실패 메시지를 반환합니다.
    pub fn into_input(self) -> AppResult<RegistrationInput> {
        self.validate()
            .map_err(|e| AppError::ValidationError(first_error_message(&e, &["email", "password"])))?;

        match (self.email, self.password) {
            (Some(email), Some(password)) => Ok(RegistrationInput {
                email,
                password,
                username: self.username,
            }),
            (None, _) => Err(AppError::ValidationError(EMAIL_REQUIRED.to_string())),
            (_, None) => Err(AppError::ValidationError(PASSWORD_REQUIRED.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> AppResult<RegistrationInput> {
        serde_json::from_str::<RegisterRequest>(json).unwrap().into_input()
    }

    fn message(result: AppResult<RegistrationInput>) -> String {
        match result {
            Err(AppError::ValidationError(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_registration() {
        let input = parse(r#"{"email": "a@b.com", "password": "password123", "username": "  alice "}"#).unwrap();

        assert_eq!(input.email, "a@b.com");
        assert_eq!(input.password, "password123");
        assert_eq!(input.username.as_deref(), Some("alice"));
    }

    #[test]
    fn test_messages_follow_field_order() {
        assert_eq!(message(parse(r#"{}"#)), "Email is required");
        assert_eq!(message(parse(r#"{"email": "", "password": ""}"#)), "Email is required");
        assert_eq!(message(parse(r#"{"email": "not-an-email", "password": ""}"#)), "Invalid email format");
        assert_eq!(message(parse(r#"{"email": "a@b.com"}"#)), "Password is required");
        assert_eq!(message(parse(r#"{"email": "a@b.com", "password": ""}"#)), "Password is required");
        assert_eq!(
            message(parse(r#"{"email": "a@b.com", "password": "short"}"#)),
            "Password must be at least 8 characters long"
        );
    }

    #[test]
    fn test_password_length_counts_characters() {
        // 8 글자, 24 바이트
        assert!(parse(r#"{"email": "a@b.com", "password": "비밀번호비밀번호"}"#).is_ok());
        assert!(parse(r#"{"email": "a@b.com", "password": "비밀번호비밀번"}"#).is_err());
    }

    #[test]
    fn test_blank_username_is_absent() {
        let input = parse(r#"{"email": "a@b.com", "password": "password123", "username": "   "}"#).unwrap();
        assert_eq!(input.username, None);
    }
}
