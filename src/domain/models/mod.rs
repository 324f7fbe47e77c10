//! # Domain Models Module
//!
//! 영속화되지 않는 도메인 모델 (외부 신원, 토큰 클레임, 인증 주체)을 정의합니다.

pub mod auth;
pub mod oauth;
pub mod token;

pub use auth::AuthenticatedUser;
pub use oauth::ProviderIdentity;
pub use token::TokenClaims;
