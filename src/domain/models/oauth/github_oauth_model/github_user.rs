//! # GitHub OAuth 응답 모델
//!
//! `login/oauth/access_token`, `/user`, `/user/emails` 응답을 정의합니다.

use serde::Deserialize;

/// 토큰 교환 응답 (`Accept: application/json`)
///
/// GitHub은 잘못된 코드에도 200과 함께 `error` 필드를 돌려줍니다.
#[derive(Debug, Deserialize)]
pub struct GitHubTokenResponse {
    pub access_token: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// `/user` 응답
#[derive(Debug, Deserialize)]
pub struct GitHubUser {
    pub id: i64,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// `/user/emails` 응답 항목
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubEmail {
    pub email: String,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub verified: bool,
}

/// 비공개 이메일 목록에서 사용할 주소를 고릅니다.
///
/// primary + verified 항목을 우선하고, 없으면 첫 번째 verified 항목을 사용합니다.
pub fn select_verified_email(emails: &[GitHubEmail]) -> Option<String> {
    emails
        .iter()
        .find(|e| e.primary && e.verified)
        .or_else(|| emails.iter().find(|e| e.verified))
        .map(|e| e.email.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(address: &str, primary: bool, verified: bool) -> GitHubEmail {
        GitHubEmail {
            email: address.to_string(),
            primary,
            verified,
        }
    }

    #[test]
    fn test_primary_verified_wins() {
        let emails = vec![
            email("first@verified.com", false, true),
            email("x@y.com", true, true),
        ];
        assert_eq!(select_verified_email(&emails).as_deref(), Some("x@y.com"));
    }

    #[test]
    fn test_falls_back_to_first_verified() {
        let emails = vec![
            email("primary@unverified.com", true, false),
            email("second@verified.com", false, true),
            email("third@verified.com", false, true),
        ];
        assert_eq!(select_verified_email(&emails).as_deref(), Some("second@verified.com"));
    }

    #[test]
    fn test_no_verified_email() {
        let emails = vec![email("primary@unverified.com", true, false)];
        assert_eq!(select_verified_email(&emails), None);
        assert_eq!(select_verified_email(&[]), None);
    }

    #[test]
    fn test_user_with_null_email_deserializes() {
        let user: GitHubUser = serde_json::from_str(r#"{"id": 583231, "login": "octocat", "email": null}"#).unwrap();
        assert_eq!(user.id, 583231);
        assert_eq!(user.login.as_deref(), Some("octocat"));
        assert!(user.email.is_none());
    }
}
