//! OAuth HTTP Handlers
//!
//! 프로바이더 동의 화면으로의 리다이렉트와 콜백 처리를 담당합니다.
//!
//! # Endpoints
//!
//! - `GET /api/auth/google`, `GET /api/auth/github` - 동의 화면으로 302
//! - `GET /api/auth/google/callback`, `GET /api/auth/github/callback`
//!
//! 콜백 성공 시 세션 토큰을 fragment에 담아 프론트엔드로 302 리다이렉트합니다.
//! 저장소 충돌/실패처럼 재시도로 해결될 수 있는 실패는 base64url로 인코딩된
//! 메시지와 함께 프론트엔드 로그인 페이지로 보내고, 입력이나 프로바이더 측
//! 문제는 `{"message": ...}` JSON 에러로 응답합니다.
use actix_web::{get, http::header, web, HttpResponse};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use crate::{
    core::AppState,
    domain::dto::accounts::request::OAuthCallbackQuery,
    errors::{AppError, AppResult},
    services::auth::IdentityExchange,
};

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// 프론트엔드 에러 페이지 리다이렉트
///
/// 디버그 환경에서만 상세 내용을 메시지 뒤에 붙입니다.
fn error_redirect(state: &AppState, exchange: &dyn IdentityExchange, detail: &str) -> HttpResponse {
    let mut message = format!(
        "An error occurred during {} authentication.",
        exchange.provider().display_name()
    );
    if state.config.environment.is_debug() {
        message.push_str(&format!(": {}", detail));
    }

    let encoded = URL_SAFE_NO_PAD.encode(message.as_bytes());
    redirect(&state.config.frontend.error_redirect_url(&encoded))
}

/// 코드 교환 → 계정 해석 → 세션 토큰 발급
async fn sign_in(state: &AppState, exchange: &dyn IdentityExchange, code: &str) -> AppResult<String> {
    let identity = exchange.exchange(code).await?;
    let account = state
        .identity_resolver
        .resolve(exchange.provider(), identity)
        .await?
        .into_account();

    state.token_service.issue(&account)
}

async fn handle_callback(
    state: &AppState,
    exchange: &dyn IdentityExchange,
    query: OAuthCallbackQuery,
) -> Result<HttpResponse, AppError> {
    let provider = exchange.provider().display_name();

    if let Some(error) = query.error.as_deref() {
        let detail = query.error_description.as_deref().unwrap_or(error);
        log::warn!("{} OAuth 에러: {} - {}", provider, error, detail);
        return Ok(error_redirect(state, exchange, detail));
    }

    let code = query
        .authorization_code()
        .ok_or_else(|| AppError::ValidationError("Authorization code not found.".to_string()))?;

    match sign_in(state, exchange, code).await {
        Ok(token) => {
            log::info!("{} OAuth 로그인 성공", provider);
            Ok(redirect(&state.config.frontend.token_redirect_url(&token)))
        }
        Err(err) if err.redirects_on_callback() => {
            log::error!("{} OAuth 로그인 실패: {}", provider, err);
            Ok(error_redirect(state, exchange, &err.to_string()))
        }
        Err(err) => Err(err),
    }
}

/// Google 동의 화면으로 리다이렉트
///
/// # Endpoint
/// `GET /api/auth/google`
#[get("/auth/google")]
pub async fn google_login(state: web::Data<AppState>) -> HttpResponse {
    redirect(&state.google.authorization_url())
}

/// Google OAuth 콜백 처리 핸들러
///
/// # Endpoint
/// `GET /api/auth/google/callback?code={code}&state={state}`
#[get("/auth/google/callback")]
pub async fn google_callback(
    state: web::Data<AppState>,
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    handle_callback(&state, state.google.as_ref(), query.into_inner()).await
}

/// GitHub 동의 화면으로 리다이렉트
///
/// # Endpoint
/// `GET /api/auth/github`
#[get("/auth/github")]
pub async fn github_login(state: web::Data<AppState>) -> HttpResponse {
    redirect(&state.github.authorization_url())
}

/// GitHub OAuth 콜백 처리 핸들러
///
/// # Endpoint
/// `GET /api/auth/github/callback?code={code}`
#[get("/auth/github/callback")]
pub async fn github_callback(
    state: web::Data<AppState>,
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    handle_callback(&state, state.github.as_ref(), query.into_inner()).await
}
