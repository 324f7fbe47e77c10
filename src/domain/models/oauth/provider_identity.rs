//! 프로바이더 교환 결과를 정규화한 외부 신원 모델

use serde::{Deserialize, Serialize};

/// OAuth 교환 어댑터가 반환하는 정규화된 외부 신원
///
/// 계정 연동 판단에는 `provider_user_id`와 `email`만 사용됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderIdentity {
    /// 프로바이더 측 고유 ID (Google `sub`, GitHub 숫자 ID의 문자열)
    pub provider_user_id: String,
    /// 비어 있을 수 있으며, 비어 있으면 계정 연동 단계에서 거부됩니다.
    pub email: String,
    pub email_verified: Option<bool>,
    /// 사용자명 후보 (GitHub login)
    pub display_name_hint: Option<String>,
}

impl ProviderIdentity {
    pub fn new(provider_user_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            provider_user_id: provider_user_id.into(),
            email: email.into(),
            email_verified: None,
            display_name_hint: None,
        }
    }

    pub fn with_display_name_hint(mut self, hint: Option<String>) -> Self {
        self.display_name_hint = hint;
        self
    }

    pub fn with_email_verified(mut self, verified: Option<bool>) -> Self {
        self.email_verified = verified;
        self
    }
}
