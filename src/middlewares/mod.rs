//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer` 세션 토큰 추출 및 검증
//! - 사용자 정보를 request extension에 저장
//! - 실패 시 `{"message": ...}` 본문의 401 응답
//!
//! ```rust,ignore
//! App::new()
//!     .service(
//!         web::scope("/api/auth/me")
//!             .wrap(AuthMiddleware::required())
//!             .route("", web::get().to(current_account))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
