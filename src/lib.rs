//! 아이덴티티 백엔드
//!
//! 이메일/비밀번호 가입과 로그인, Google/GitHub OAuth 로그인을 하나의 계정으로
//! 연결하고, 모든 경로에서 동일한 JWT 세션 토큰을 발급하는 인증 서비스입니다.
//!
//! # Features
//!
//! - **로컬 계정**: bcrypt 해시 기반 가입/로그인
//! - **OAuth 2.0**: Google (ID 토큰 서명 검증), GitHub (비공개 이메일 조회)
//! - **계정 연동**: 같은 이메일의 프로바이더 로그인은 기존 계정에 연결
//! - **JWT 세션**: HS256 서명, `user_id`/`email`/`exp` 클레임
//! - **MongoDB**: 유니크 인덱스로 중복 계정 방지
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 콜백 리다이렉트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 계정, 토큰, 신원 해석, 프로바이더 어댑터
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← AccountStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use identity_backend::core::AppState;
//!
//! let state = AppState::new(config, Arc::new(repository), http);
//! let user_id = state.account_service.register(input).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
