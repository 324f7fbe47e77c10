//! # GitHub OAuth Domain Models
//!
//! ```text
//! 인증 URL: https://github.com/login/oauth/authorize
//! 토큰 교환: https://github.com/login/oauth/access_token
//! 사용자:   https://api.github.com/user
//! 이메일:   https://api.github.com/user/emails
//! ```

pub mod github_user;

pub use github_user::{select_verified_email, GitHubEmail, GitHubTokenResponse, GitHubUser};
