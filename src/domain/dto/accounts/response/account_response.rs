//! 계정 관련 응답 DTO

use serde::Serialize;
use crate::domain::entities::accounts::Account;

/// `POST /api/register` 201 응답
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: i64,
}

impl RegisterResponse {
    pub fn new(user_id: i64) -> Self {
        Self {
            message: "User registered successfully".to_string(),
            user_id,
        }
    }
}

/// `POST /api/login` 200 응답
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// `GET /api/auth/me` 응답
///
/// 비밀번호 해시와 프로바이더 ID는 노출하지 않고 연동 여부만 전달합니다.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: i64,
    pub email: String,
    pub username: Option<String>,
    pub has_password: bool,
    pub google_linked: bool,
    pub github_linked: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            has_password: account.has_password(),
            google_linked: account.google_subject_id.is_some(),
            github_linked: account.github_user_id.is_some(),
            created_at: account.created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: account.updated_at.try_to_rfc3339_string().unwrap_or_default(),
            email: account.email,
            username: account.username,
        }
    }
}

/// 메시지만 담는 응답 (`PUT /api/auth/change-password`)
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// 메시지와 계정 정보를 함께 담는 응답 (`GET /api/auth/verify`, `PUT /api/auth/profile`)
#[derive(Debug, Serialize)]
pub struct AccountMessageResponse {
    pub message: String,
    pub user: AccountResponse,
}

impl AccountMessageResponse {
    pub fn new(message: impl Into<String>, account: Account) -> Self {
        Self {
            message: message.into(),
            user: AccountResponse::from(account),
        }
    }
}
