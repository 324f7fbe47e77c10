//! 세션 토큰 클레임
//!
//! 모든 인증 경로(비밀번호, Google, GitHub)가 동일한 클레임 세트를 발급합니다.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub user_id: i64,
    pub email: String,
    /// 만료 시각 (unix timestamp, 초)
    pub exp: i64,
}
