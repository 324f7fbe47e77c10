//! 인증 및 보안 서비스 모듈
//!
//! 세션 토큰 발급/검증, 프로바이더 어댑터, 외부 신원 해석을 담당합니다.
//!
//! # Features
//!
//! - HS256 세션 토큰 발급 및 검증
//! - Google OAuth 2.0 (JWKS 기반 ID 토큰 검증)
//! - GitHub OAuth (비공개 이메일 조회 포함)
//! - 프로바이더 신원 → 로컬 계정 해석 (Bound / Linked / Created)
//!
//! # Examples
//!
//! ```rust,ignore
//! let identity = google.exchange(code).await?;
//! let account = resolver.resolve(AuthProvider::Google, identity).await?.into_account();
//! let token = token_service.issue(&account)?;
//! ```

pub mod token_service;
pub mod identity_exchange;
pub mod identity_resolver;
pub mod google_auth_service;
pub mod github_auth_service;
#[cfg(test)]
pub(crate) mod fake_provider;

pub use token_service::TokenService;
pub use identity_exchange::IdentityExchange;
pub use identity_resolver::{IdentityResolver, Resolution};
pub use google_auth_service::{verify_id_token_with_jwks, GoogleAuthService};
pub use github_auth_service::GitHubAuthService;
