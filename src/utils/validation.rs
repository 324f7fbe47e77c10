//! # 입력 검증 유틸리티
//!
//! 이메일 형식 검사와 `validator` 에러에서 클라이언트 메시지를 고르는 함수입니다.

use std::borrow::Cow;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::{ValidationError, ValidationErrors};

/// `local@domain.tld` 형태의 느슨한 이메일 패턴
///
/// 시작 위치에만 고정되며, 이미 가입된 주소가 거부되지 않도록 엄격하게 바꾸지 않습니다.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("email pattern is a valid regex")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// 메시지가 설정된 `ValidationError`를 만듭니다.
pub fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// 필드 우선순위대로 첫 번째 에러 메시지를 반환합니다.
///
/// `ValidationErrors`는 필드 순서를 보장하지 않으므로 호출자가 순서를 정합니다.
pub fn first_error_message(errors: &ValidationErrors, field_order: &[&str]) -> String {
    let field_errors = errors.field_errors();

    field_order
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid request".to_string())
}
