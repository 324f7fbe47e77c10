//! 프로바이더 어댑터 인터페이스
//!
//! 인가 URL 생성과 인가 코드 교환을 프로바이더별로 구현합니다.
//! 핸들러는 이 trait만 알고 있으므로 테스트에서는 고정 응답을 돌려주는 구현을 주입합니다.

use async_trait::async_trait;
use crate::config::AuthProvider;
use crate::domain::models::oauth::ProviderIdentity;
use crate::errors::AppResult;

#[async_trait]
pub trait IdentityExchange: Send + Sync {
    fn provider(&self) -> AuthProvider;

    /// 브라우저를 보낼 프로바이더 동의 화면 URL
    fn authorization_url(&self) -> String;

    /// 인가 코드를 검증된 외부 신원으로 교환합니다.
    async fn exchange(&self, code: &str) -> AppResult<ProviderIdentity>;
}
