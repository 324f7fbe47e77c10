//! 프로바이더 테스트 더블
//!
//! [`FakeProvider`]는 임의 포트에 actix 서버를 띄워 실제 HTTP 왕복을 검증하고,
//! [`StubExchange`]는 네트워크 없이 핸들러 흐름을 검증합니다.

use actix_web::{dev::ServerHandle, web, App, HttpServer};
use async_trait::async_trait;
use crate::config::AuthProvider;
use crate::domain::models::oauth::ProviderIdentity;
use crate::errors::{AppError, AppResult};
use super::identity_exchange::IdentityExchange;

pub struct FakeProvider {
    pub base_url: String,
    handle: ServerHandle,
}

impl FakeProvider {
    pub fn start<F>(configure: F) -> Self
    where
        F: Fn(&mut web::ServiceConfig) + Clone + Send + 'static,
    {
        let server = HttpServer::new(move || App::new().configure(configure.clone()))
            .workers(1)
            .disable_signals()
            .bind(("127.0.0.1", 0))
            .unwrap();
        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            base_url: format!("http://{}", addr),
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

/// 고정 결과를 돌려주는 프로바이더 어댑터
pub struct StubExchange {
    provider: AuthProvider,
    result: AppResult<ProviderIdentity>,
}

impl StubExchange {
    pub fn returning(provider: AuthProvider, identity: ProviderIdentity) -> Self {
        Self { provider, result: Ok(identity) }
    }

    pub fn failing(provider: AuthProvider, error: AppError) -> Self {
        Self { provider, result: Err(error) }
    }

    pub fn unused(provider: AuthProvider) -> Self {
        Self::failing(provider, AppError::InternalError("unexpected exchange".to_string()))
    }
}

#[async_trait]
impl IdentityExchange for StubExchange {
    fn provider(&self) -> AuthProvider {
        self.provider
    }

    fn authorization_url(&self) -> String {
        format!("https://{}.provider.test/authorize?client_id=test", self.provider.as_str())
    }

    async fn exchange(&self, _code: &str) -> AppResult<ProviderIdentity> {
        self.result.clone()
    }
}
