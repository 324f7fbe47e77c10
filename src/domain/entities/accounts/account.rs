//! Account Entity Implementation
//!
//! 로컬 자격 증명과 외부 프로바이더 바인딩을 하나의 레코드로 담는 계정 엔티티입니다.
//! 한 계정은 비밀번호, Google, GitHub 바인딩을 동시에 가질 수 있습니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

/// 영속화되는 유일한 엔티티
///
/// `email`은 대소문자를 그대로 비교하며 정규화하지 않습니다.
/// 값이 없는 선택 필드는 직렬화에서 빠지므로 sparse 유니크 인덱스와 함께 동작합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// 생성 시 부여되는 정수 대리 키
    #[serde(rename = "_id")]
    pub id: i64,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_digest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_subject_id: Option<String>,
    /// GitHub 숫자 ID의 문자열 표현
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_user_id: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Account {
    /// 해당 프로바이더에 바인딩된 외부 ID
    pub fn provider_id(&self, provider: AuthProvider) -> Option<&str> {
        match provider {
            AuthProvider::Google => self.google_subject_id.as_deref(),
            AuthProvider::GitHub => self.github_user_id.as_deref(),
        }
    }

    /// 프로바이더 바인딩을 설정합니다. 다른 필드는 건드리지 않습니다.
    pub fn bind_provider(&mut self, provider: AuthProvider, provider_user_id: &str) {
        let slot = match provider {
            AuthProvider::Google => &mut self.google_subject_id,
            AuthProvider::GitHub => &mut self.github_user_id,
        };
        *slot = Some(provider_user_id.to_string());
        self.updated_at = DateTime::now();
    }

    pub fn has_password(&self) -> bool {
        self.password_digest.is_some()
    }
}

/// 아직 ID가 부여되지 않은 신규 계정
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub email: String,
    pub username: Option<String>,
    pub password_digest: Option<String>,
    pub google_subject_id: Option<String>,
    pub github_user_id: Option<String>,
}

impl NewAccount {
    /// 이메일/비밀번호 가입 계정
    pub fn local(email: String, username: Option<String>, password_digest: String) -> Self {
        Self {
            email,
            username,
            password_digest: Some(password_digest),
            google_subject_id: None,
            github_user_id: None,
        }
    }

    /// 프로바이더 최초 로그인으로 생성되는 계정 (비밀번호 없음)
    pub fn federated(provider: AuthProvider, provider_user_id: String, email: String, username: String) -> Self {
        let mut account = Self {
            email,
            username: Some(username),
            password_digest: None,
            google_subject_id: None,
            github_user_id: None,
        };

        match provider {
            AuthProvider::Google => account.google_subject_id = Some(provider_user_id),
            AuthProvider::GitHub => account.github_user_id = Some(provider_user_id),
        }

        account
    }

    /// 저장소가 부여한 ID와 현재 시각으로 엔티티를 완성합니다.
    pub fn into_account(self, id: i64) -> Account {
        let now = DateTime::now();

        Account {
            id,
            email: self.email,
            username: self.username,
            password_digest: self.password_digest,
            google_subject_id: self.google_subject_id,
            github_user_id: self.github_user_id,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_federated_account_sets_only_its_provider() {
        let account = NewAccount::federated(
            AuthProvider::GitHub,
            "583231".to_string(),
            "octo@example.com".to_string(),
            "octocat".to_string(),
        )
        .into_account(7);

        assert_eq!(account.provider_id(AuthProvider::GitHub), Some("583231"));
        assert_eq!(account.provider_id(AuthProvider::Google), None);
        assert!(!account.has_password());
        assert_eq!(account.username.as_deref(), Some("octocat"));
    }

    #[test]
    fn test_bind_provider_keeps_password_and_other_bindings() {
        let mut account = NewAccount::local("a@b.com".to_string(), None, "digest".to_string()).into_account(1);
        account.github_user_id = Some("42".to_string());

        account.bind_provider(AuthProvider::Google, "sub-1");

        assert_eq!(account.id, 1);
        assert_eq!(account.password_digest.as_deref(), Some("digest"));
        assert_eq!(account.github_user_id.as_deref(), Some("42"));
        assert_eq!(account.google_subject_id.as_deref(), Some("sub-1"));
    }

    #[test]
    fn test_absent_bindings_are_not_serialized() {
        let account = NewAccount::local("a@b.com".to_string(), None, "digest".to_string()).into_account(3);
        let document = bson::to_document(&account).unwrap();

        assert_eq!(document.get_i64("_id").unwrap(), 3);
        assert!(!document.contains_key("username"));
        assert!(!document.contains_key("google_subject_id"));
        assert!(!document.contains_key("github_user_id"));

        let restored: Account = bson::from_document(document).unwrap();
        assert_eq!(restored, account);
    }
}
