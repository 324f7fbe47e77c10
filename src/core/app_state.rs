//! # Application State
//!
//! 시작 시 한 번 조립되는 서비스 묶음입니다. `web::Data<AppState>`로 모든 워커에
//! 공유되며, 핸들러와 미들웨어는 전역 레지스트리 대신 이 값에서 의존성을 꺼냅니다.
//!
//! ```text
//! AppConfig ──┬─► TokenService
//!             ├─► AccountService ──┐
//!             ├─► IdentityResolver ┼─► Arc<dyn AccountStore>
//!             ├─► GoogleAuthService (Arc<dyn IdentityExchange>)
//!             └─► GitHubAuthService (Arc<dyn IdentityExchange>)
//! ```

use std::sync::Arc;
use crate::{
    config::AppConfig,
    repositories::accounts::AccountStore,
    services::{
        accounts::{AccountService, PasswordHasher},
        auth::{GitHubAuthService, GoogleAuthService, IdentityExchange, IdentityResolver, TokenService},
    },
};

pub struct AppState {
    pub config: Arc<AppConfig>,
    pub account_service: AccountService,
    pub identity_resolver: IdentityResolver,
    pub token_service: TokenService,
    pub google: Arc<dyn IdentityExchange>,
    pub github: Arc<dyn IdentityExchange>,
}

impl AppState {
    /// 실제 프로바이더 어댑터로 상태를 조립합니다.
    pub fn new(config: AppConfig, store: Arc<dyn AccountStore>, http: reqwest::Client) -> Self {
        let google = Arc::new(GoogleAuthService::new(config.google.clone(), http.clone()));
        let github = Arc::new(GitHubAuthService::new(config.github.clone(), http));
        Self::from_parts(config, store, google, github)
    }

    /// 프로바이더 어댑터를 직접 지정해 조립합니다.
    pub fn from_parts(
        config: AppConfig,
        store: Arc<dyn AccountStore>,
        google: Arc<dyn IdentityExchange>,
        github: Arc<dyn IdentityExchange>,
    ) -> Self {
        let hasher = PasswordHasher::new(config.password.bcrypt_cost);

        Self {
            account_service: AccountService::new(store.clone(), hasher),
            identity_resolver: IdentityResolver::new(store),
            token_service: TokenService::new(&config.jwt),
            google,
            github,
            config: Arc::new(config),
        }
    }
}
