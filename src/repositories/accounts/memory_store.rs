//! 테스트용 메모리 계정 저장소
//!
//! MongoDB 인덱스와 같은 유니크 규칙을 적용하며, 동시 가입 경쟁과
//! 저장소 장애를 재현하기 위한 훅을 제공합니다.

use std::sync::Mutex;
use async_trait::async_trait;
use mongodb::bson::DateTime;
use crate::config::AuthProvider;
use crate::domain::entities::accounts::{Account, NewAccount};
use crate::errors::{AppError, AppResult};
use super::account_store::{AccountStore, EMAIL_TAKEN, PROVIDER_ID_TAKEN, USERNAME_TAKEN};

#[derive(Default)]
struct MemoryState {
    accounts: Vec<Account>,
    next_id: i64,
    /// 다음 쓰기 직전에 다른 요청이 먼저 써 넣는 계정
    competing_insert: Option<NewAccount>,
    fail_writes: bool,
}

impl MemoryState {
    fn check_unique(&self, candidate: &Account) -> AppResult<()> {
        for existing in &self.accounts {
            if existing.id == candidate.id {
                continue;
            }
            if existing.email == candidate.email {
                return Err(AppError::ConflictError(EMAIL_TAKEN.to_string()));
            }
            if candidate.username.is_some() && existing.username == candidate.username {
                return Err(AppError::ConflictError(USERNAME_TAKEN.to_string()));
            }
            if candidate.google_subject_id.is_some() && existing.google_subject_id == candidate.google_subject_id {
                return Err(AppError::ConflictError(PROVIDER_ID_TAKEN.to_string()));
            }
            if candidate.github_user_id.is_some() && existing.github_user_id == candidate.github_user_id {
                return Err(AppError::ConflictError(PROVIDER_ID_TAKEN.to_string()));
            }
        }
        Ok(())
    }

    /// 예약된 장애와 경쟁 쓰기를 반영합니다. 모든 쓰기 연산의 첫 단계입니다.
    fn begin_write(&mut self) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::StorageError("write failed: connection reset".to_string()));
        }
        if let Some(competing) = self.competing_insert.take() {
            self.insert(competing)?;
        }
        Ok(())
    }

    /// 한 계정을 수정하고, 유니크 규칙을 통과한 경우에만 반영합니다.
    fn update(&mut self, account_id: i64, apply: impl FnOnce(&mut Account)) -> AppResult<Account> {
        self.begin_write()?;

        let mut updated = self
            .accounts
            .iter()
            .find(|a| a.id == account_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("account {}", account_id)))?;
        apply(&mut updated);
        updated.updated_at = DateTime::now();
        self.check_unique(&updated)?;

        if let Some(slot) = self.accounts.iter_mut().find(|a| a.id == account_id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    fn insert(&mut self, account: NewAccount) -> AppResult<Account> {
        let account = account.into_account(self.next_id + 1);
        self.check_unique(&account)?;
        self.next_id += 1;
        self.accounts.push(account.clone());
        Ok(account)
    }
}

#[derive(Default)]
pub struct MemoryAccountStore {
    state: Mutex<MemoryState>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap()
    }

    /// 다음 쓰기 요청이 경쟁에서 지도록 다른 요청의 생성을 예약합니다.
    pub fn race_next_write_with(&self, account: NewAccount) {
        self.lock().competing_insert = Some(account);
    }

    /// 이후의 모든 쓰기를 저장소 실패로 만듭니다.
    pub fn fail_writes(&self) {
        self.lock().fail_writes = true;
    }

    pub fn len(&self) -> usize {
        self.lock().accounts.len()
    }

    pub fn all(&self) -> Vec<Account> {
        self.lock().accounts.clone()
    }

    fn find(&self, predicate: impl Fn(&Account) -> bool) -> Option<Account> {
        self.lock().accounts.iter().find(|a| predicate(a)).cloned()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Account>> {
        Ok(self.find(|a| a.id == id))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        Ok(self.find(|a| a.email == email))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        Ok(self.find(|a| a.username.as_deref() == Some(username)))
    }

    async fn find_by_provider_id(&self, provider: AuthProvider, provider_user_id: &str) -> AppResult<Option<Account>> {
        Ok(self.find(|a| a.provider_id(provider) == Some(provider_user_id)))
    }

    async fn create(&self, account: NewAccount) -> AppResult<Account> {
        let mut state = self.lock();
        state.begin_write()?;
        state.insert(account)
    }

    async fn link_provider(&self, account_id: i64, provider: AuthProvider, provider_user_id: &str) -> AppResult<Account> {
        self.lock().update(account_id, |account| account.bind_provider(provider, provider_user_id))
    }

    async fn set_password_digest(&self, account_id: i64, password_digest: &str) -> AppResult<Account> {
        self.lock().update(account_id, |account| {
            account.password_digest = Some(password_digest.to_string());
        })
    }

    async fn set_username(&self, account_id: i64, username: &str) -> AppResult<Account> {
        self.lock().update(account_id, |account| account.username = Some(username.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_assigns_sequential_ids_and_enforces_email_uniqueness() {
        let store = MemoryAccountStore::new();
        let first = store
            .create(NewAccount::local("a@b.com".into(), None, "digest".into()))
            .await
            .unwrap();
        let second = store
            .create(NewAccount::local("c@d.com".into(), None, "digest".into()))
            .await
            .unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        let err = store
            .create(NewAccount::local("a@b.com".into(), None, "digest".into()))
            .await
            .unwrap_err();
        assert_eq!(err, AppError::ConflictError(EMAIL_TAKEN.to_string()));
        assert_eq!(store.len(), 2);
    }

    #[actix_web::test]
    async fn test_missing_usernames_do_not_collide() {
        let store = MemoryAccountStore::new();
        store.create(NewAccount::local("a@b.com".into(), None, "d".into())).await.unwrap();
        store.create(NewAccount::local("c@d.com".into(), None, "d".into())).await.unwrap();

        store
            .create(NewAccount::federated(AuthProvider::GitHub, "7".into(), "e@f.com".into(), "dup".into()))
            .await
            .unwrap();
        let err = store
            .create(NewAccount::federated(AuthProvider::GitHub, "8".into(), "g@h.com".into(), "dup".into()))
            .await
            .unwrap_err();
        assert_eq!(err, AppError::ConflictError(USERNAME_TAKEN.to_string()));
    }

    #[actix_web::test]
    async fn test_link_provider_keeps_other_fields() {
        let store = MemoryAccountStore::new();
        let account = store
            .create(NewAccount::local("a@b.com".into(), Some("alice".into()), "digest".into()))
            .await
            .unwrap();

        let linked = store.link_provider(account.id, AuthProvider::Google, "g-1").await.unwrap();
        assert_eq!(linked.google_subject_id.as_deref(), Some("g-1"));
        assert_eq!(linked.password_digest.as_deref(), Some("digest"));
        assert_eq!(linked.username.as_deref(), Some("alice"));

        let found = store.find_by_provider_id(AuthProvider::Google, "g-1").await.unwrap();
        assert_eq!(found.map(|a| a.id), Some(account.id));

        let err = store.link_provider(99, AuthProvider::Google, "g-2").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[actix_web::test]
    async fn test_username_update_respects_uniqueness() {
        let store = MemoryAccountStore::new();
        let alice = store
            .create(NewAccount::local("a@b.com".into(), Some("alice".into()), "digest".into()))
            .await
            .unwrap();
        let bob = store
            .create(NewAccount::local("c@d.com".into(), None, "digest".into()))
            .await
            .unwrap();

        let err = store.set_username(bob.id, "alice").await.unwrap_err();
        assert_eq!(err, AppError::ConflictError(USERNAME_TAKEN.to_string()));
        assert_eq!(store.find_by_id(bob.id).await.unwrap().unwrap().username, None);

        let renamed = store.set_username(alice.id, "alice").await.unwrap();
        assert_eq!(renamed.username.as_deref(), Some("alice"));
    }

    #[actix_web::test]
    async fn test_set_password_digest_keeps_provider_binding() {
        let store = MemoryAccountStore::new();
        let account = store
            .create(NewAccount::federated(AuthProvider::GitHub, "42".into(), "x@y.com".into(), "octo".into()))
            .await
            .unwrap();

        let updated = store.set_password_digest(account.id, "new-digest").await.unwrap();

        assert_eq!(updated.password_digest.as_deref(), Some("new-digest"));
        assert_eq!(updated.github_user_id.as_deref(), Some("42"));
    }
}
