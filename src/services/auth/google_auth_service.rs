//! # Google OAuth 2.0 인증 서비스
//!
//! Authorization Code 플로우로 Google 신원을 확인합니다.
//!
//! ```text
//! 1. 동의 화면 URL 생성 (openid email profile, offline)
//! 2. 콜백으로 받은 code → 토큰 엔드포인트에서 id_token 교환
//! 3. Google JWKS로 id_token 서명, 발급자, 대상(client_id), 만료 검증
//! 4. 검증된 클레임 → ProviderIdentity
//! ```
//!
//! 서명을 검증하지 않은 ID 토큰의 클레임은 절대 사용하지 않습니다.

use async_trait::async_trait;
use jsonwebtoken::{decode, decode_header, jwk::JwkSet, Algorithm, DecodingKey, Validation};
use log::{error, info, warn};
use crate::{
    config::{AuthProvider, GoogleOAuthConfig},
    domain::models::oauth::{
        google_oauth_model::{GoogleIdTokenClaims, GoogleTokenResponse},
        ProviderIdentity,
    },
    errors::{AppError, AppResult},
};
use super::identity_exchange::IdentityExchange;

/// Google ID 토큰의 허용 발급자
const GOOGLE_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];

const TOKEN_EXCHANGE_FAILED: &str = "Google token exchange failed.";
const SIGNING_KEYS_UNAVAILABLE: &str = "Google signing keys unavailable";

/// 전송/파싱 에러는 로그에만 남기고 고정 메시지로 바꿉니다.
fn token_exchange_failure(context: &str, e: reqwest::Error) -> AppError {
    error!("Google {} 실패: {}", context, e);
    AppError::TokenExchangeError(TOKEN_EXCHANGE_FAILED.to_string())
}

fn signing_keys_failure(e: reqwest::Error) -> AppError {
    error!("Google 서명 키 조회 실패: {}", e);
    AppError::ProviderCommunicationError(SIGNING_KEYS_UNAVAILABLE.to_string())
}

pub struct GoogleAuthService {
    config: GoogleOAuthConfig,
    http: reqwest::Client,
}

impl GoogleAuthService {
    pub fn new(config: GoogleOAuthConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// 인가 코드를 토큰 엔드포인트에서 교환하고 `id_token`을 꺼냅니다.
    async fn exchange_code_for_id_token(&self, code: &str) -> AppResult<String> {
        let params = [
            ("code", code),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self.http
            .post(&self.config.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| token_exchange_failure("토큰 요청", e))?;

        let status = response.status();
        let body = response
            .json::<GoogleTokenResponse>()
            .await
            .map_err(|e| token_exchange_failure("토큰 응답 파싱", e))?;

        if !status.is_success() || body.error.is_some() {
            warn!("Google 토큰 교환 거부 ({}): {:?}", status.as_u16(), body.error);
            return Err(AppError::TokenExchangeError(
                body.error_description
                    .or(body.error)
                    .unwrap_or_else(|| TOKEN_EXCHANGE_FAILED.to_string()),
            ));
        }

        body.id_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::TokenExchangeError("No ID token received from Google.".to_string()))
    }

    async fn fetch_signing_keys(&self) -> AppResult<JwkSet> {
        let response = self.http
            .get(&self.config.certs_uri)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(signing_keys_failure)?;

        response
            .json::<JwkSet>()
            .await
            .map_err(signing_keys_failure)
    }
}

/// 서명 키 집합으로 Google ID 토큰을 검증합니다.
///
/// `kid`에 맞는 키가 없거나, 서명/발급자/대상/만료 중 하나라도 어긋나면
/// `TokenVerificationError`를 반환합니다.
pub fn verify_id_token_with_jwks(id_token: &str, jwks: &JwkSet, client_id: &str) -> AppResult<GoogleIdTokenClaims> {
    let rejected = |reason: String| {
        warn!("Google ID 토큰 검증 실패: {}", reason);
        AppError::TokenVerificationError("Invalid Google ID token".to_string())
    };

    let header = decode_header(id_token).map_err(|e| rejected(e.to_string()))?;
    let kid = header.kid.ok_or_else(|| rejected("missing kid".to_string()))?;
    let jwk = jwks
        .find(&kid)
        .ok_or_else(|| rejected(format!("unknown kid {}", kid)))?;
    let key = DecodingKey::from_jwk(jwk).map_err(|e| rejected(e.to_string()))?;

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[client_id]);
    validation.set_issuer(&GOOGLE_ISSUERS);

    decode::<GoogleIdTokenClaims>(id_token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| rejected(e.to_string()))
}

#[async_trait]
impl IdentityExchange for GoogleAuthService {
    fn provider(&self) -> AuthProvider {
        AuthProvider::Google
    }

    fn authorization_url(&self) -> String {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("response_type", "code"),
            ("scope", "openid email profile"),
            ("access_type", "offline"),
            ("include_granted_scopes", "true"),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.config.auth_uri, query_string)
    }

    async fn exchange(&self, code: &str) -> AppResult<ProviderIdentity> {
        let id_token = self.exchange_code_for_id_token(code).await?;
        let jwks = self.fetch_signing_keys().await?;
        let claims = verify_id_token_with_jwks(&id_token, &jwks, &self.config.client_id)?;

        info!("Google ID 토큰 검증 완료: sub={}", claims.sub);
        Ok(ProviderIdentity::new(claims.sub, claims.email.unwrap_or_default())
            .with_email_verified(claims.email_verified))
    }
}
