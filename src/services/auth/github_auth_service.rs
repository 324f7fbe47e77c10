//! # GitHub OAuth 인증 서비스
//!
//! ```text
//! 1. 동의 화면 URL 생성 (user:email read:user)
//! 2. code → access_token 교환 (Accept: application/json)
//! 3. GET /user 로 프로필 조회
//! 4. 프로필 이메일이 비공개면 GET /user/emails 에서 primary+verified 선택
//! ```

use async_trait::async_trait;
use log::{info, warn};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use crate::{
    config::{AuthProvider, GitHubOAuthConfig},
    domain::models::oauth::{
        github_oauth_model::{select_verified_email, GitHubEmail, GitHubTokenResponse, GitHubUser},
        ProviderIdentity,
    },
    errors::{AppError, AppResult},
};
use super::identity_exchange::IdentityExchange;
use super::identity_resolver::missing_email_message;

const GITHUB_API_ACCEPT: &str = "application/vnd.github.v3+json";

pub struct GitHubAuthService {
    config: GitHubOAuthConfig,
    http: reqwest::Client,
}

fn communication_error(context: &str, e: reqwest::Error) -> AppError {
    warn!("GitHub {} 실패: {}", context, e);
    AppError::ProviderCommunicationError(format!("GitHub {} failed", context))
}

impl GitHubAuthService {
    pub fn new(config: GitHubOAuthConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    async fn exchange_code_for_access_token(&self, code: &str) -> AppResult<String> {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("code", code),
            ("redirect_uri", self.config.redirect_uri.as_str()),
        ];

        let body = self.http
            .post(&self.config.token_uri)
            .header(ACCEPT, "application/json")
            .form(&params)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| communication_error("token request", e))?
            .json::<GitHubTokenResponse>()
            .await
            .map_err(|e| communication_error("token response", e))?;

        match body.access_token.filter(|token| !token.is_empty()) {
            Some(token) => Ok(token),
            None => {
                warn!("GitHub 토큰 교환 거부: {:?}", body.error);
                Err(AppError::TokenExchangeError(
                    body.error_description
                        .unwrap_or_else(|| "GitHub token exchange failed.".to_string()),
                ))
            }
        }
    }

    async fn get_api<T: DeserializeOwned>(&self, path: &str, access_token: &str) -> AppResult<T> {
        let url = format!("{}{}", self.config.api_base_url.trim_end_matches('/'), path);

        self.http
            .get(&url)
            .header(AUTHORIZATION, format!("token {}", access_token))
            .header(ACCEPT, GITHUB_API_ACCEPT)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| communication_error(path, e))?
            .json::<T>()
            .await
            .map_err(|e| communication_error(path, e))
    }
}

#[async_trait]
impl IdentityExchange for GitHubAuthService {
    fn provider(&self) -> AuthProvider {
        AuthProvider::GitHub
    }

    fn authorization_url(&self) -> String {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("scope", "user:email read:user"),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.config.authorize_uri, query_string)
    }

    async fn exchange(&self, code: &str) -> AppResult<ProviderIdentity> {
        let access_token = self.exchange_code_for_access_token(code).await?;
        let user: GitHubUser = self.get_api("/user", &access_token).await?;

        let public_email = user.email.clone().filter(|email| !email.trim().is_empty());
        let (email, verified) = match public_email {
            Some(email) => (email, None),
            None => {
                let emails: Vec<GitHubEmail> = self.get_api("/user/emails", &access_token).await?;
                let email = select_verified_email(&emails).ok_or_else(|| {
                    AppError::MissingEmailError(missing_email_message(AuthProvider::GitHub).to_string())
                })?;
                (email, Some(true))
            }
        };

        info!("GitHub 사용자 확인: id={}", user.id);
        Ok(ProviderIdentity::new(user.id.to_string(), email)
            .with_email_verified(verified)
            .with_display_name_hint(user.login))
    }
}
