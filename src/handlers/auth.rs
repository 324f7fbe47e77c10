//! Authentication HTTP Handlers
//!
//! 이메일/비밀번호 가입과 로그인, 현재 계정 조회 엔드포인트입니다.
//!
//! # Endpoints
//!
//! - `POST /api/register` - 로컬 계정 생성 (201)
//! - `POST /api/login` - 세션 토큰 발급 (200)
//! - `GET /api/auth/me` - 토큰 주체의 계정 정보 (인증 미들웨어 필요)
//! - `GET /api/auth/verify` - 토큰 유효성 확인 (인증 미들웨어 필요)
//! - `PUT /api/auth/profile` - 사용자명 변경 (인증 미들웨어 필요)
//! - `PUT /api/auth/change-password` - 비밀번호 변경/설정 (인증 미들웨어 필요)
use actix_web::{get, post, put, web, HttpResponse};
use crate::{
    core::AppState,
    domain::{
        dto::accounts::{
            request::{ChangePasswordRequest, LoginRequest, RegisterRequest, UpdateProfileRequest},
            response::{AccountMessageResponse, AccountResponse, LoginResponse, MessageResponse, RegisterResponse},
        },
        models::auth::AuthenticatedUser,
    },
    errors::AppError,
};

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /api/register`
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let input = payload.into_inner().into_input()?;
    let user_id = state.account_service.register(input).await?;

    Ok(HttpResponse::Created().json(RegisterResponse::new(user_id)))
}

/// 로컬 로그인 핸들러
///
/// # Endpoint
/// `POST /api/login`
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let input = payload.into_inner().into_input()?;
    let account = state.account_service.login(input).await?;
    let access_token = state.token_service.issue(&account)?;

    Ok(HttpResponse::Ok().json(LoginResponse { access_token }))
}

/// 현재 인증된 계정 정보 조회
///
/// 토큰은 유효하지만 계정이 더 이상 없으면 토큰을 무효로 취급합니다.
///
/// # Endpoint
/// `GET /api/auth/me`
#[get("")]
pub async fn current_account(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let account = state.account_service.current_account(user.user_id).await?;

    Ok(HttpResponse::Ok().json(AccountResponse::from(account)))
}

/// 토큰 유효성 확인
///
/// # Endpoint
/// `GET /api/auth/verify`
#[get("")]
pub async fn verify_token(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let account = state.account_service.current_account(user.user_id).await?;

    Ok(HttpResponse::Ok().json(AccountMessageResponse::new("Token is valid", account)))
}

/// 사용자명 변경
///
/// # Endpoint
/// `PUT /api/auth/profile`
#[put("")]
pub async fn update_profile(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    let input = payload.into_inner().into_input()?;
    let account = state.account_service.update_profile(user.user_id, input).await?;

    Ok(HttpResponse::Ok().json(AccountMessageResponse::new("Profile updated successfully", account)))
}

/// 비밀번호 변경 (소셜 계정은 최초 설정)
///
/// # Endpoint
/// `PUT /api/auth/change-password`
#[put("")]
pub async fn change_password(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: web::Json<ChangePasswordRequest>,
) -> Result<HttpResponse, AppError> {
    let input = payload.into_inner().into_input()?;
    let outcome = state.account_service.change_password(user.user_id, input).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(outcome.message())))
}
