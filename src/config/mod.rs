//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값을 시작 시 한 번 읽어 [`AppConfig`]로 조립합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, 프론트엔드 관련 설정
//! - [`auth_config`] - OAuth 프로바이더, JWT 관련 설정
//! - [`app_config`] - 전체 설정 묶음
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리
//!
//! 개발, 테스트, 스테이징, 프로덕션 환경별로 다른 기본값을 제공합니다.
//! `PROFILE`에 따라 `.env.dev` / `.env.prod` 파일이 먼저 로드됩니다.
//!
//! ### 2. 명시적 전달
//!
//! 설정은 전역 변수가 아닌 값으로 전달됩니다. 각 설정 구조체는 조회 함수를 받는
//! `from_lookup`을 제공하므로 테스트에서 프로세스 환경을 건드리지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::AppConfig;
//!
//! let config = AppConfig::from_env();
//! println!("Server will bind to {}", config.server.bind_address());
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 / 저장소
//! export HOST="0.0.0.0"
//! export PORT="5001"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="identity_backend"
//!
//! # 세션 토큰
//! export SECRET_KEY="your-super-secret-key"
//!
//! # 프론트엔드
//! export FRONTEND_BASE_URL="http://localhost:5000"
//!
//! # 선택 사항
//! export ENVIRONMENT="production"    # development, test, staging, production
//! export BCRYPT_COST="12"
//! export PROVIDER_TIMEOUT_SECS="10"
//! ```

pub mod data_config;
pub mod auth_config;
pub mod app_config;

pub use data_config::*;
pub use auth_config::*;
pub use app_config::AppConfig;
