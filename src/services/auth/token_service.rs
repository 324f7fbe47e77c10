//! JWT 세션 토큰 서비스
//!
//! HMAC-SHA256으로 서명된 세션 토큰을 발급하고 검증합니다.
//! 비밀번호 로그인과 프로바이더 콜백 모두 이 서비스로 토큰을 발급합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use crate::{
    config::JwtConfig,
    domain::{entities::accounts::Account, models::token::TokenClaims},
    errors::{AppError, AppResult, ErrorContext},
};

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            expiration_hours: config.expiration_hours,
        }
    }

    /// 계정에 대한 세션 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let account = account_service.login(input).await?;
    /// let access_token = token_service.issue(&account)?;
    /// ```
    pub fn issue(&self, account: &Account) -> AppResult<String> {
        let expiration = Utc::now() + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            user_id: account.id,
            email: account.email.clone(),
            exp: expiration.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .context("JWT 토큰 생성 실패")
    }

    /// 서명과 만료 시각을 확인하고 클레임을 반환합니다.
    pub fn verify(&self, token: &str) -> AppResult<TokenClaims> {
        decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenInvalidError("Token has expired".to_string()),
                _ => AppError::TokenInvalidError("Invalid token".to_string()),
            })
    }

    /// `Authorization: Bearer {token}` 헤더 값에서 토큰 부분을 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::TokenInvalidError("Invalid authorization header".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::accounts::NewAccount;

    fn service(secret: &str) -> TokenService {
        TokenService::new(&JwtConfig {
            secret: secret.to_string(),
            expiration_hours: 24,
        })
    }

    fn account() -> Account {
        NewAccount::local("a@b.com".into(), None, "digest".into()).into_account(7)
    }

    #[test]
    fn test_issue_and_verify_claims() {
        let service = service("test-secret");
        let token = service.issue(&account()).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.email, "a@b.com");

        let remaining = claims.exp - Utc::now().timestamp();
        assert!(remaining > 23 * 3600 && remaining <= 24 * 3600, "remaining = {}", remaining);
    }

    #[test]
    fn test_foreign_signature_is_rejected() {
        let token = service("other-secret").issue(&account()).unwrap();
        let err = service("test-secret").verify(&token).unwrap_err();
        assert_eq!(err, AppError::TokenInvalidError("Invalid token".to_string()));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = service("test-secret");
        let claims = TokenClaims {
            user_id: 7,
            email: "a@b.com".to_string(),
            exp: (Utc::now() - Duration::hours(1)).timestamp(),
        };
        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(b"test-secret")).unwrap();

        let err = service.verify(&token).unwrap_err();
        assert_eq!(err, AppError::TokenInvalidError("Token has expired".to_string()));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = service("test-secret");
        assert_eq!(service.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
    }
}
