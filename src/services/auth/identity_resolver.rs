//! # 외부 신원 해석기
//!
//! 프로바이더가 확인한 신원을 로컬 계정 하나로 해석합니다.
//!
//! ```text
//! 1. 프로바이더 ID로 바인딩된 계정이 있으면  → Bound   (변경 없음)
//! 2. 같은 이메일의 계정이 있으면             → Linked  (프로바이더 ID만 추가)
//! 3. 둘 다 없으면                           → Created (비밀번호 없는 새 계정)
//! ```
//!
//! 연동은 기존 계정의 비밀번호와 다른 프로바이더 바인딩을 그대로 둡니다.

use std::sync::Arc;
use log::{info, warn};
use crate::{
    config::AuthProvider,
    domain::{
        entities::accounts::{Account, NewAccount},
        models::oauth::ProviderIdentity,
    },
    errors::{AppError, AppResult},
    repositories::accounts::AccountStore,
    utils::string_utils::{char_prefix, email_local_part},
};

/// 사용자명이 이미 있을 때 붙이는 프로바이더 ID 접두 길이
const USERNAME_SUFFIX_LEN: usize = 6;

/// 해석 결과
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// 이미 이 프로바이더 ID가 바인딩된 계정
    Bound(Account),
    /// 이메일이 같은 기존 계정에 프로바이더 ID를 연동함
    Linked(Account),
    /// 새로 생성한 계정
    Created(Account),
}

impl Resolution {
    pub fn account(&self) -> &Account {
        match self {
            Resolution::Bound(account) | Resolution::Linked(account) | Resolution::Created(account) => account,
        }
    }

    pub fn into_account(self) -> Account {
        match self {
            Resolution::Bound(account) | Resolution::Linked(account) | Resolution::Created(account) => account,
        }
    }
}

/// 프로바이더가 이메일을 주지 않았을 때의 메시지
pub fn missing_email_message(provider: AuthProvider) -> &'static str {
    match provider {
        AuthProvider::Google => "Email not provided by Google.",
        AuthProvider::GitHub => {
            "Could not retrieve a verified email from GitHub. Please ensure you have a primary, verified email set on GitHub."
        }
    }
}

pub struct IdentityResolver {
    store: Arc<dyn AccountStore>,
}

impl IdentityResolver {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// 외부 신원을 계정으로 해석합니다.
    ///
    /// # Errors
    ///
    /// * `MissingEmailError` - 이메일이 비어 있음 (저장소 조회 전에 거부)
    /// * `ConflictError` - 동시 요청과 경쟁해 유니크 제약에 걸림. 재시도하면 `Bound`/`Linked`로 해석됩니다.
    /// * `StorageError` - 저장소 실패
    pub async fn resolve(&self, provider: AuthProvider, identity: ProviderIdentity) -> AppResult<Resolution> {
        if identity.email.trim().is_empty() {
            warn!("{} 신원에 이메일이 없습니다: id={}", provider.display_name(), identity.provider_user_id);
            return Err(AppError::MissingEmailError(missing_email_message(provider).to_string()));
        }

        if let Some(account) = self
            .store
            .find_by_provider_id(provider, &identity.provider_user_id)
            .await?
        {
            info!("{} 계정 로그인: id={}", provider.display_name(), account.id);
            return Ok(Resolution::Bound(account));
        }

        if let Some(existing) = self.store.find_by_email(&identity.email).await? {
            // 같은 프로바이더의 다른 ID가 이미 있어도 새 ID로 덮어씁니다.
            let account = self
                .store
                .link_provider(existing.id, provider, &identity.provider_user_id)
                .await?;
            info!("🔗 기존 계정에 {} 연동: id={}", provider.display_name(), account.id);
            return Ok(Resolution::Linked(account));
        }

        let username = self.choose_username(&identity).await?;
        let account = self
            .store
            .create(NewAccount::federated(
                provider,
                identity.provider_user_id,
                identity.email,
                username,
            ))
            .await?;

        info!("✅ {} 신규 계정 생성: id={}", provider.display_name(), account.id);
        Ok(Resolution::Created(account))
    }

    /// 표시 이름 힌트(없으면 이메일 로컬 파트)를 쓰고, 이미 있으면 프로바이더 ID 접두를 붙입니다.
    ///
    /// 접미사를 붙인 이름은 다시 확인하지 않습니다. 드물게 겹치면 저장소의
    /// 유니크 제약이 `ConflictError`로 막습니다.
    async fn choose_username(&self, identity: &ProviderIdentity) -> AppResult<String> {
        let candidate = identity
            .display_name_hint
            .as_deref()
            .map(str::trim)
            .filter(|hint| !hint.is_empty())
            .unwrap_or_else(|| email_local_part(&identity.email));

        if self.store.find_by_username(candidate).await?.is_none() {
            return Ok(candidate.to_string());
        }

        Ok(format!(
            "{}_{}",
            candidate,
            char_prefix(&identity.provider_user_id, USERNAME_SUFFIX_LEN)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::accounts::MemoryAccountStore;

    fn resolver() -> (Arc<MemoryAccountStore>, IdentityResolver) {
        let store = Arc::new(MemoryAccountStore::new());
        let resolver = IdentityResolver::new(store.clone());
        (store, resolver)
    }

    #[actix_web::test]
    async fn test_first_sign_in_creates_passwordless_account() {
        let (store, resolver) = resolver();
        let identity = ProviderIdentity::new("g-123", "x@y.com");

        let resolution = resolver.resolve(AuthProvider::Google, identity).await.unwrap();

        let Resolution::Created(account) = resolution else {
            panic!("expected Created, got {:?}", resolution);
        };
        assert_eq!(account.google_subject_id.as_deref(), Some("g-123"));
        assert_eq!(account.username.as_deref(), Some("x"));
        assert!(!account.has_password());
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_existing_email_is_linked_not_duplicated() {
        let (store, resolver) = resolver();
        let local = store
            .create(NewAccount::local("a@b.com".into(), Some("alice".into()), "digest".into()))
            .await
            .unwrap();

        let resolution = resolver
            .resolve(AuthProvider::Google, ProviderIdentity::new("g-1", "a@b.com"))
            .await
            .unwrap();

        let Resolution::Linked(account) = resolution else {
            panic!("expected Linked, got {:?}", resolution);
        };
        assert_eq!(account.id, local.id);
        assert_eq!(account.google_subject_id.as_deref(), Some("g-1"));
        assert_eq!(account.password_digest.as_deref(), Some("digest"));
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_second_sign_in_is_bound_and_stable() {
        let (store, resolver) = resolver();
        let first = resolver
            .resolve(AuthProvider::GitHub, ProviderIdentity::new("42", "x@y.com"))
            .await
            .unwrap()
            .into_account();

        let second = resolver
            .resolve(AuthProvider::GitHub, ProviderIdentity::new("42", "x@y.com"))
            .await
            .unwrap();

        assert!(matches!(second, Resolution::Bound(_)));
        assert_eq!(second.account(), &first);
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_both_providers_link_to_one_account() {
        let (store, resolver) = resolver();
        resolver
            .resolve(AuthProvider::Google, ProviderIdentity::new("g-9", "x@y.com"))
            .await
            .unwrap();

        let account = resolver
            .resolve(AuthProvider::GitHub, ProviderIdentity::new("42", "x@y.com"))
            .await
            .unwrap()
            .into_account();

        assert_eq!(account.google_subject_id.as_deref(), Some("g-9"));
        assert_eq!(account.github_user_id.as_deref(), Some("42"));
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_taken_username_gets_provider_suffix() {
        let (store, resolver) = resolver();
        store
            .create(NewAccount::local("other@z.com".into(), Some("octocat".into()), "digest".into()))
            .await
            .unwrap();

        let identity = ProviderIdentity::new("583231", "x@y.com")
            .with_display_name_hint(Some("octocat".to_string()));
        let account = resolver
            .resolve(AuthProvider::GitHub, identity)
            .await
            .unwrap()
            .into_account();

        assert_eq!(account.username.as_deref(), Some("octocat_583231"));
    }

    #[actix_web::test]
    async fn test_missing_email_is_rejected_before_storage() {
        let (store, resolver) = resolver();
        store.fail_writes();

        let err = resolver
            .resolve(AuthProvider::GitHub, ProviderIdentity::new("42", ""))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AppError::MissingEmailError(missing_email_message(AuthProvider::GitHub).to_string())
        );
        assert_eq!(store.len(), 0);
    }

    #[actix_web::test]
    async fn test_creation_race_surfaces_conflict_and_retry_binds() {
        let (store, resolver) = resolver();
        store.race_next_write_with(NewAccount::federated(
            AuthProvider::Google,
            "g-1".into(),
            "x@y.com".into(),
            "x".into(),
        ));

        let err = resolver
            .resolve(AuthProvider::Google, ProviderIdentity::new("g-1", "x@y.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ConflictError(_)));
        assert_eq!(store.len(), 1);

        let retry = resolver
            .resolve(AuthProvider::Google, ProviderIdentity::new("g-1", "x@y.com"))
            .await
            .unwrap();
        assert!(matches!(retry, Resolution::Bound(_)));
    }

    #[actix_web::test]
    async fn test_provider_id_match_wins_over_another_accounts_email() {
        let (store, resolver) = resolver();
        let bound = store
            .create(NewAccount::federated(AuthProvider::GitHub, "42".into(), "a@x.com".into(), "a".into()))
            .await
            .unwrap();
        let other = store
            .create(NewAccount::local("b@x.com".into(), Some("b".into()), "digest".into()))
            .await
            .unwrap();

        let resolution = resolver
            .resolve(AuthProvider::GitHub, ProviderIdentity::new("42", "b@x.com"))
            .await
            .unwrap();

        let Resolution::Bound(account) = resolution else {
            panic!("expected Bound, got {:?}", resolution);
        };
        assert_eq!(account.id, bound.id);
        let untouched = store.find_by_id(other.id).await.unwrap().unwrap();
        assert_eq!(untouched.github_user_id, None);
        assert_eq!(untouched, other);
        assert_eq!(store.len(), 2);
    }

    #[actix_web::test]
    async fn test_changed_provider_email_still_resolves_to_bound_account() {
        let (store, resolver) = resolver();
        let original = resolver
            .resolve(AuthProvider::GitHub, ProviderIdentity::new("42", "old@x.com"))
            .await
            .unwrap()
            .into_account();

        let resolution = resolver
            .resolve(AuthProvider::GitHub, ProviderIdentity::new("42", "new@x.com"))
            .await
            .unwrap();

        assert!(matches!(resolution, Resolution::Bound(_)));
        assert_eq!(resolution.account().id, original.id);
        assert_eq!(resolution.account().email, "old@x.com");
        assert_eq!(store.len(), 1);
    }
}
