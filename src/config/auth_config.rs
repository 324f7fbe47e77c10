//! # Authentication Configuration Module
//!
//! OAuth 프로바이더, JWT 세션 토큰 등 인증 관련 설정을 관리하는 모듈입니다.
//!
//! ## 지원하는 인증 방식
//!
//! 1. **로컬 인증**: 이메일/패스워드 기반 인증
//! 2. **Google OAuth 2.0**: ID 토큰 서명 검증 후 계정 연동
//! 3. **GitHub OAuth**: 비공개 이메일 목록 조회를 포함한 계정 연동
//! 4. **JWT 토큰**: HS256 서명 세션 토큰
//!
//! ## 필수 환경 변수 설정
//!
//! ### Google OAuth 설정
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_REDIRECT_URI="http://localhost:5001/api/auth/google/callback"
//! ```
//!
//! ### GitHub OAuth 설정
//! ```bash
//! export GITHUB_CLIENT_ID="your-github-client-id"
//! export GITHUB_CLIENT_SECRET="your-github-client-secret"
//! export GITHUB_REDIRECT_URI="http://localhost:5001/api/auth/github/callback"
//! ```
//!
//! ### JWT 토큰 설정
//! ```bash
//! export SECRET_KEY="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```
//!
//! 프로바이더 엔드포인트(`*_AUTH_URI`, `*_TOKEN_URI` 등)는 모두 재정의할 수 있어
//! 스테이징이나 테스트에서 가짜 프로바이더를 가리키게 할 수 있습니다.

use log::warn;
use super::data_config::{string_or, parse_or, EnvLookup};

const DEFAULT_JWT_SECRET: &str = "dev-secret-key-change-me";

const GOOGLE_AUTH_URI: &str = "https://accounts.google.com/o/oauth2/auth";
const GOOGLE_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_CERTS_URI: &str = "https://www.googleapis.com/oauth2/v3/certs";
const GOOGLE_REDIRECT_URI: &str = "http://localhost:5001/api/auth/google/callback";

/// 값이 없으면 경고를 남기고 빈 문자열을 사용합니다.
fn credential<L: EnvLookup>(lookup: &L, key: &str) -> String {
    lookup(key).unwrap_or_else(|| {
        warn!("{} not set, provider sign-in will fail until it is configured", key);
        String::new()
    })
}

/// Google OAuth 2.0 클라이언트 설정
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub auth_uri: String,
    pub token_uri: String,
    /// ID 토큰 서명 검증용 JWKS 엔드포인트
    pub certs_uri: String,
}

impl Default for GoogleOAuthConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            redirect_uri: GOOGLE_REDIRECT_URI.to_string(),
            auth_uri: GOOGLE_AUTH_URI.to_string(),
            token_uri: GOOGLE_TOKEN_URI.to_string(),
            certs_uri: GOOGLE_CERTS_URI.to_string(),
        }
    }
}

impl GoogleOAuthConfig {
    pub fn from_lookup<L: EnvLookup>(lookup: &L) -> Self {
        Self {
            client_id: credential(lookup, "GOOGLE_CLIENT_ID"),
            client_secret: credential(lookup, "GOOGLE_CLIENT_SECRET"),
            redirect_uri: string_or(lookup, "GOOGLE_REDIRECT_URI", GOOGLE_REDIRECT_URI),
            auth_uri: string_or(lookup, "GOOGLE_AUTH_URI", GOOGLE_AUTH_URI),
            token_uri: string_or(lookup, "GOOGLE_TOKEN_URI", GOOGLE_TOKEN_URI),
            certs_uri: string_or(lookup, "GOOGLE_CERTS_URI", GOOGLE_CERTS_URI),
        }
    }
}

/// GitHub OAuth 앱 설정
#[derive(Debug, Clone, PartialEq)]
pub struct GitHubOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub authorize_uri: String,
    pub token_uri: String,
    /// REST API 베이스 URL (`/user`, `/user/emails`)
    pub api_base_url: String,
}

impl Default for GitHubOAuthConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            redirect_uri: "http://localhost:5001/api/auth/github/callback".to_string(),
            authorize_uri: "https://github.com/login/oauth/authorize".to_string(),
            token_uri: "https://github.com/login/oauth/access_token".to_string(),
            api_base_url: "https://api.github.com".to_string(),
        }
    }
}

impl GitHubOAuthConfig {
    pub fn from_lookup<L: EnvLookup>(lookup: &L) -> Self {
        let defaults = Self::default();
        Self {
            client_id: credential(lookup, "GITHUB_CLIENT_ID"),
            client_secret: credential(lookup, "GITHUB_CLIENT_SECRET"),
            redirect_uri: string_or(lookup, "GITHUB_REDIRECT_URI", &defaults.redirect_uri),
            authorize_uri: string_or(lookup, "GITHUB_AUTHORIZE_URI", &defaults.authorize_uri),
            token_uri: string_or(lookup, "GITHUB_TOKEN_URI", &defaults.token_uri),
            api_base_url: string_or(lookup, "GITHUB_API_BASE_URL", &defaults.api_base_url),
        }
    }
}

/// 세션 토큰 서명 설정
#[derive(Debug, Clone, PartialEq)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_JWT_SECRET.to_string(),
            expiration_hours: 24,
        }
    }
}

impl JwtConfig {
    /// `SECRET_KEY`(없으면 `JWT_SECRET`)와 `JWT_EXPIRATION_HOURS`를 읽습니다.
    pub fn from_lookup<L: EnvLookup>(lookup: &L) -> Self {
        let secret = lookup("SECRET_KEY")
            .or_else(|| lookup("JWT_SECRET"))
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| {
                warn!("SECRET_KEY not set, using default (not secure for production!)");
                DEFAULT_JWT_SECRET.to_string()
            });

        Self {
            secret,
            expiration_hours: parse_or(lookup, "JWT_EXPIRATION_HOURS", 24),
        }
    }
}

/// 계정에 연동되는 외부 인증 프로바이더
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Google,
    GitHub,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Google => "google",
            AuthProvider::GitHub => "github",
        }
    }

    /// 사용자에게 보여지는 프로바이더 이름
    pub fn display_name(&self) -> &'static str {
        match self {
            AuthProvider::Google => "Google",
            AuthProvider::GitHub => "GitHub",
        }
    }
}

impl std::fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
