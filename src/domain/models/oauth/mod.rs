//! # OAuth Domain Models Module
//!
//! 프로바이더별 응답 모델과, 이를 정규화한 [`ProviderIdentity`]를 정의합니다.
//!
//! ```text
//! oauth/
//! ├── provider_identity.rs     ← 정규화된 외부 신원
//! ├── google_oauth_model/      ← Google 토큰 응답, ID 토큰 클레임
//! └── github_oauth_model/      ← GitHub 토큰/사용자/이메일 응답
//! ```

pub mod provider_identity;
pub mod google_oauth_model;
pub mod github_oauth_model;

pub use provider_identity::ProviderIdentity;
