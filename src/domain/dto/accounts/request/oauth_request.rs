//! OAuth 콜백 쿼리 DTO

use serde::Deserialize;

/// `GET /api/auth/{provider}/callback` 쿼리
///
/// `state`는 받기만 하고 검증하지 않습니다.
#[derive(Debug, Default, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl OAuthCallbackQuery {
    /// 비어 있지 않은 인가 코드
    pub fn authorization_code(&self) -> Option<&str> {
        self.code.as_deref().filter(|code| !code.is_empty())
    }
}
