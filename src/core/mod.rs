//! # Core Module
//!
//! 애플리케이션 조립에 필요한 공통 구성 요소입니다.
//!
//! - [`app_state`] - 설정, 서비스, 프로바이더 어댑터를 묶은 공유 상태

pub mod app_state;

pub use app_state::AppState;
