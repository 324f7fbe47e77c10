//! 로그인 요청 DTO

use serde::Deserialize;
use validator::Validate;
use crate::errors::{AppError, AppResult};
use crate::utils::validation::first_error_message;
use super::register_request::{validate_email_field, validate_password_present, EMAIL_REQUIRED, PASSWORD_REQUIRED};

/// `POST /api/login` 요청 본문
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(required(message = "Email is required"), custom(function = "validate_email_field"))]
    pub email: Option<String>,

    #[validate(required(message = "Password is required"), custom(function = "validate_password_present"))]
    pub password: Option<String>,
}

/// 검증을 통과한 로그인 입력
#[derive(Debug, Clone, PartialEq)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn into_input(self) -> AppResult<LoginInput> {
        self.validate()
            .map_err(|e| AppError::ValidationError(first_error_message(&e, &["email", "password"])))?;

        match (self.email, self.password) {
            (Some(email), Some(password)) => Ok(LoginInput { email, password }),
            (None, _) => Err(AppError::ValidationError(EMAIL_REQUIRED.to_string())),
            (_, None) => Err(AppError::ValidationError(PASSWORD_REQUIRED.to_string())),
        }
    }
}
