//! # Google OAuth 2.0 Domain Models
//!
//! Authorization Code 교환 후 받은 ID 토큰은 Google JWKS로 서명을 검증한 뒤에만
//! [`GoogleIdTokenClaims`]로 취급됩니다.
//!
//! ```text
//! 인증 URL: https://accounts.google.com/o/oauth2/auth
//! 토큰 교환: https://oauth2.googleapis.com/token
//! 서명 키:   https://www.googleapis.com/oauth2/v3/certs
//! ```

pub mod google_user;

pub use google_user::{GoogleIdTokenClaims, GoogleTokenResponse};
