//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청을 DTO로 받아 검증된 입력으로 변환한 뒤, [`AppState`](crate::core::AppState)의
//! 서비스에 위임하고 결과를 HTTP 응답으로 바꿉니다.
//!
//! ```text
//! Client ──► Handlers (이 모듈) ──► Services ──► AccountStore ──► MongoDB
//!                  │
//!                  └─► AppError → {"message": ...} JSON 응답
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 로컬 인증 엔드포인트
//!   - 회원가입 (`POST /api/register`)
//!   - 로그인 (`POST /api/login`)
//!   - 현재 계정 (`GET /api/auth/me`)
//!
//! - **`oauth`**: 프로바이더 엔드포인트
//!   - 동의 화면 리다이렉트 (`GET /api/auth/{google,github}`)
//!   - 콜백 (`GET /api/auth/{google,github}/callback`)

pub mod auth;
pub mod oauth;
