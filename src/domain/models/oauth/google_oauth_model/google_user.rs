//! # Google OAuth 응답 모델
//!
//! 토큰 엔드포인트 응답과 검증된 ID 토큰 클레임을 정의합니다.

use serde::Deserialize;

/// `https://oauth2.googleapis.com/token` 응답
///
/// 실패 시에는 `error`/`error_description`만 채워집니다.
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    pub id_token: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// 서명/발급자/대상 검증을 통과한 ID 토큰 클레임
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleIdTokenClaims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: Option<bool>,
}
