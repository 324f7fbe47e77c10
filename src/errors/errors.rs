//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 계정/인증 흐름에서 발생하는 모든 실패를 하나의 열거형으로 분류하고,
//! `actix_web::ResponseError` 구현을 통해 HTTP 상태 코드와 JSON 응답으로 변환합니다.
//!
//! ## 상태 코드 매핑
//!
//! | 에러 | 상태 코드 |
//! |------|-----------|
//! | `ValidationError`, `MissingEmailError` | 400 |
//! | `AuthenticationError`, `TokenVerificationError`, `TokenInvalidError` | 401 |
//! | `NotFound` | 404 |
//! | `ConflictError` | 409 |
//! | `ProviderCommunicationError` | 502 |
//! | `TokenExchangeError`, `StorageError`, `InternalError` | 500 |
//!
//! 응답 본문은 항상 `{"message": "..."}` 형태이며, 저장소/내부 에러의 상세 내용은
//! 로그에만 남기고 클라이언트에는 일반 메시지를 전달합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn register(input: RegistrationInput) -> Result<i64, AppError> {
//!     if store.find_by_email(&input.email).await?.is_some() {
//!         return Err(AppError::ConflictError("Email already registered".to_string()));
//!     }
//!     Ok(store.create(account).await?.id)
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 5xx 응답에서 상세 내용 대신 전달되는 메시지
pub const GENERIC_SERVER_MESSAGE: &str = "An error occurred while processing the request. Please try again.";

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 유니크 제약 위반 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 자격 증명 불일치 (401 Unauthorized)
    ///
    /// 이메일 미존재와 비밀번호 불일치를 구분하지 않는 단일 메시지를 사용합니다.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 프로바이더 ID 토큰 서명/발급자/대상 검증 실패 (401 Unauthorized)
    #[error("Token verification error: {0}")]
    TokenVerificationError(String),

    /// 세션 토큰 검증 실패 또는 만료 (401 Unauthorized)
    #[error("Invalid token: {0}")]
    TokenInvalidError(String),

    /// 인가 코드 교환 실패 (500 Internal Server Error)
    ///
    /// 메시지는 프로바이더가 돌려준 `error_description`이므로 그대로 노출합니다.
    #[error("Token exchange error: {0}")]
    TokenExchangeError(String),

    /// 프로바이더가 사용할 수 있는 이메일을 제공하지 않음 (400 Bad Request)
    #[error("Missing email: {0}")]
    MissingEmailError(String),

    /// 프로바이더 통신 실패 또는 타임아웃 (502 Bad Gateway)
    #[error("Provider communication error: {0}")]
    ProviderCommunicationError(String),

    /// 저장소 실패 (500 Internal Server Error)
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 리소스 없음 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 전달할 메시지를 반환합니다.
    ///
    /// 저장소/내부 에러는 상세 내용 대신 [`GENERIC_SERVER_MESSAGE`]를 반환합니다.
    pub fn client_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::TokenInvalidError(msg)
            | AppError::TokenExchangeError(msg)
            | AppError::MissingEmailError(msg)
            | AppError::NotFound(msg) => msg.clone(),
            AppError::TokenVerificationError(msg) => format!("Authentication failed: {}", msg),
            AppError::ProviderCommunicationError(msg) => format!("Communication error with provider: {}", msg),
            AppError::StorageError(_) | AppError::InternalError(_) => GENERIC_SERVER_MESSAGE.to_string(),
        }
    }

    /// OAuth 콜백에서 JSON 대신 프론트엔드 에러 페이지로 리다이렉트해야 하는지 여부
    ///
    /// 클라이언트가 고칠 수 있는 입력 문제와 프로바이더 측 실패는 JSON으로,
    /// 저장소 충돌/실패와 내부 에러는 재시도 가능한 인증 실패로 리다이렉트합니다.
    pub fn redirects_on_callback(&self) -> bool {
        matches!(
            self,
            AppError::ConflictError(_)
                | AppError::StorageError(_)
                | AppError::InternalError(_)
                | AppError::NotFound(_)
                | AppError::AuthenticationError(_)
                | AppError::TokenInvalidError(_)
        )
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::MissingEmailError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_)
            | AppError::TokenVerificationError(_)
            | AppError::TokenInvalidError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::ProviderCommunicationError(_) => StatusCode::BAD_GATEWAY,
            AppError::TokenExchangeError(_)
            | AppError::StorageError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 분류되지 않은 에러가 그대로 노출되지 않도록 5xx는 로그를 남긴 뒤 정제합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("❌ 요청 처리 실패 ({}): {}", status.as_u16(), self);
        } else {
            log::warn!("요청 거부 ({}): {}", status.as_u16(), self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "message": self.client_message()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
