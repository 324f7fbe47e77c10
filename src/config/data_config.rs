//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경, 패스워드 해싱, 외부 HTTP 호출, 프론트엔드 관련 설정을 관리합니다.
//! 모든 설정은 시작 시 한 번 읽혀 [`AppConfig`](super::AppConfig)에 담깁니다.

use log::warn;

/// 환경 변수 조회 함수 타입
///
/// 테스트에서는 `HashMap` 기반 조회로 대체됩니다.
pub trait EnvLookup: Fn(&str) -> Option<String> {}

impl<F: Fn(&str) -> Option<String>> EnvLookup for F {}

/// 값이 있으면 파싱하고, 없거나 잘못된 값이면 기본값을 사용합니다.
pub(crate) fn parse_or<T, L>(lookup: &L, key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
    L: EnvLookup,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} 파싱 실패: '{}'. 기본값 {} 사용", key, raw, default);
            default
        }),
        None => default,
    }
}

/// 값이 있으면 그대로, 없으면 기본값 문자열을 사용합니다.
pub(crate) fn string_or<L: EnvLookup>(lookup: &L, key: &str, default: &str) -> String {
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 에러 상세 내용을 리다이렉트 메시지에 포함
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수에서 실행 환경을 결정합니다.
    ///
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn from_lookup<L: EnvLookup>(lookup: &L) -> Self {
        lookup("ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 클라이언트에 에러 상세 내용을 노출해도 되는 환경인지 여부
    pub fn is_debug(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// 패스워드 해싱 설정
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordConfig {
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    /// `BCRYPT_COST`가 4-31 범위면 사용하고, 아니면 환경별 기본값을 사용합니다.
    pub fn from_lookup<L: EnvLookup>(lookup: &L, env: &Environment) -> Self {
        let bcrypt_cost = lookup("BCRYPT_COST")
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|cost| (4..=31).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(env));

        Self { bcrypt_cost }
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10
    /// - Production: 12
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5001,
            workers: 4,
        }
    }
}

impl ServerConfig {
    pub fn from_lookup<L: EnvLookup>(lookup: &L) -> Self {
        let defaults = Self::default();
        Self {
            host: string_or(lookup, "HOST", &defaults.host),
            port: parse_or(lookup, "PORT", defaults.port),
            workers: parse_or(lookup, "WORKERS", defaults.workers),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub uri: String,
    pub name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            name: "identity_backend".to_string(),
        }
    }
}

impl DatabaseConfig {
    /// `MONGODB_URI`(없으면 `DATABASE_URL`)와 `DATABASE_NAME`을 읽습니다.
    pub fn from_lookup<L: EnvLookup>(lookup: &L) -> Self {
        let defaults = Self::default();
        let uri = lookup("MONGODB_URI")
            .or_else(|| lookup("DATABASE_URL"))
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.uri);

        Self {
            uri,
            name: string_or(lookup, "DATABASE_NAME", &defaults.name),
        }
    }
}

/// 프로바이더 호출용 HTTP 클라이언트 설정
#[derive(Debug, Clone, PartialEq)]
pub struct HttpClientConfig {
    /// 요청 단위 타임아웃 (초)
    pub timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self { timeout_secs: 10 }
    }
}

impl HttpClientConfig {
    pub fn from_lookup<L: EnvLookup>(lookup: &L) -> Self {
        Self {
            timeout_secs: parse_or(lookup, "PROVIDER_TIMEOUT_SECS", Self::default().timeout_secs),
        }
    }

    /// 타임아웃과 User-Agent가 설정된 reqwest 클라이언트를 생성합니다.
    ///
    /// GitHub API는 User-Agent 헤더가 없는 요청을 거부합니다.
    pub fn build_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(self.timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
    }
}

/// 브라우저 리다이렉트 대상 프론트엔드 설정
#[derive(Debug, Clone, PartialEq)]
pub struct FrontendConfig {
    pub base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
        }
    }
}

impl FrontendConfig {
    pub fn from_lookup<L: EnvLookup>(lookup: &L) -> Self {
        Self {
            base_url: string_or(lookup, "FRONTEND_BASE_URL", &Self::default().base_url),
        }
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// 로그인 성공 시 토큰을 fragment로 전달하는 URL
    pub fn token_redirect_url(&self, token: &str) -> String {
        format!("{}/frontend/handle_token.html#token={}", self.base(), token)
    }

    /// 로그인 실패 시 base64url 인코딩된 메시지를 전달하는 URL
    pub fn error_redirect_url(&self, encoded_message: &str) -> String {
        format!("{}/frontend/signin.html?error={}", self.base(), encoded_message)
    }

    /// CORS 허용 origin (경로 없이 scheme://host[:port])
    pub fn origin(&self) -> &str {
        self.base()
    }
}
