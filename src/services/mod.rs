//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 시작 시 한 번 조립되어 [`AppState`](crate::core::app_state::AppState)로 핸들러에 전달됩니다.
//!
//! - [`accounts`] - 로컬 가입/로그인, 비밀번호 해싱
//! - [`auth`] - 세션 토큰, 프로바이더 어댑터, 신원 해석

pub mod accounts;
pub mod auth;
