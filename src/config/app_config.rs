//! 애플리케이션 전체 설정
//!
//! 시작 시 한 번 조립되어 [`AppState`](crate::core::AppState)를 통해 각 컴포넌트에 전달됩니다.
//! 전역 가변 상태 없이 설정을 명시적으로 주고받습니다.

use std::env;
use log::info;
use super::auth_config::{GitHubOAuthConfig, GoogleOAuthConfig, JwtConfig};
use super::data_config::{
    DatabaseConfig, EnvLookup, Environment, FrontendConfig, HttpClientConfig, PasswordConfig, ServerConfig,
};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
    pub google: GoogleOAuthConfig,
    pub github: GitHubOAuthConfig,
    pub frontend: FrontendConfig,
    pub http_client: HttpClientConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Self {
        let config = Self::from_lookup(&|key: &str| env::var(key).ok());
        info!(
            "⚙️ 설정 로드됨: environment={:?}, bind={}, database={}, frontend={}",
            config.environment,
            config.server.bind_address(),
            config.database.name,
            config.frontend.base_url
        );
        config
    }

    pub fn from_lookup<L: EnvLookup>(lookup: &L) -> Self {
        let environment = Environment::from_lookup(lookup);
        let password = PasswordConfig::from_lookup(lookup, &environment);

        Self {
            server: ServerConfig::from_lookup(lookup),
            database: DatabaseConfig::from_lookup(lookup),
            jwt: JwtConfig::from_lookup(lookup),
            password,
            google: GoogleOAuthConfig::from_lookup(lookup),
            github: GitHubOAuthConfig::from_lookup(lookup),
            frontend: FrontendConfig::from_lookup(lookup),
            http_client: HttpClientConfig::from_lookup(lookup),
            environment,
        }
    }
}

#[cfg(test)]
impl AppConfig {
    /// 테스트용 설정 (bcrypt cost 4, 고정 시크릿)
    pub fn for_tests() -> Self {
        Self {
            environment: Environment::Test,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            jwt: JwtConfig {
                secret: "test-secret".to_string(),
                expiration_hours: 24,
            },
            password: PasswordConfig { bcrypt_cost: 4 },
            google: GoogleOAuthConfig {
                client_id: "google-client-id".to_string(),
                client_secret: "google-client-secret".to_string(),
                ..GoogleOAuthConfig::default()
            },
            github: GitHubOAuthConfig {
                client_id: "github-client-id".to_string(),
                client_secret: "github-client-secret".to_string(),
                ..GitHubOAuthConfig::default()
            },
            frontend: FrontendConfig::default(),
            http_client: HttpClientConfig::default(),
        }
    }
}
