//! # 계정 리포지토리 구현
//!
//! MongoDB `accounts` 컬렉션에 대한 [`AccountStore`] 구현입니다.
//!
//! ## 특징
//!
//! - **정수 ID**: `counters` 컬렉션의 `$inc`로 세션 토큰에 담길 정수 ID를 발급
//! - **유니크 인덱스**: email, sparse username / google_subject_id / github_user_id
//! - **원자적 쓰기**: 생성은 `insert_one`, 연동은 `find_one_and_update` 한 번으로 처리

use async_trait::async_trait;
use log::{debug, info};
use mongodb::{
    bson::{doc, DateTime, Document},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::config::AuthProvider;
use crate::db::Database;
use crate::domain::entities::accounts::{Account, NewAccount};
use crate::errors::{AppError, AppResult};
use super::account_store::{
    conflict_message, AccountStore, EMAIL_INDEX, GITHUB_USER_INDEX, GOOGLE_SUBJECT_INDEX, USERNAME_INDEX,
};

const ACCOUNTS_COLLECTION: &str = "accounts";
const COUNTERS_COLLECTION: &str = "counters";
const ACCOUNT_SEQUENCE: &str = "account_id";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 프로바이더별 바인딩 필드 이름
fn provider_field(provider: AuthProvider) -> &'static str {
    match provider {
        AuthProvider::Google => "google_subject_id",
        AuthProvider::GitHub => "github_user_id",
    }
}

/// 중복 키 에러(11000)이면 서버가 돌려준 메시지를 반환합니다.
fn duplicate_key_detail(err: &MongoError) -> Option<&str> {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE => {
            Some(write_error.message.as_str())
        }
        ErrorKind::Command(command_error) if command_error.code == DUPLICATE_KEY_CODE => {
            Some(command_error.message.as_str())
        }
        _ => None,
    }
}

/// 드라이버 에러를 분류합니다. 중복 키는 충돌, 나머지는 저장소 실패입니다.
fn map_write_error(err: MongoError) -> AppError {
    match duplicate_key_detail(&err) {
        Some(detail) => {
            debug!("유니크 제약 위반: {}", detail);
            AppError::ConflictError(conflict_message(detail).to_string())
        }
        None => AppError::StorageError(err.to_string()),
    }
}

fn storage_error(err: MongoError) -> AppError {
    AppError::StorageError(err.to_string())
}

pub struct AccountRepository {
    db: mongodb::Database,
}

impl AccountRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            db: database.get_database(),
        }
    }

    fn collection(&self) -> Collection<Account> {
        self.db.collection::<Account>(ACCOUNTS_COLLECTION)
    }

    async fn find_one(&self, filter: Document) -> AppResult<Option<Account>> {
        self.collection()
            .find_one(filter)
            .await
            .map_err(storage_error)
    }

    /// 다음 계정 ID를 발급합니다.
    async fn next_account_id(&self) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self.db
            .collection::<Document>(COUNTERS_COLLECTION)
            .find_one_and_update(
                doc! { "_id": ACCOUNT_SEQUENCE },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await
            .map_err(storage_error)?;

        counter
            .and_then(|document| document.get_i64("seq").ok())
            .ok_or_else(|| AppError::StorageError("계정 ID 시퀀스를 읽을 수 없습니다".to_string()))
    }

    /// 유니크 인덱스를 생성합니다. 시작 시 한 번 호출됩니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let unique = |name: &str, sparse: bool| {
            IndexOptions::builder()
                .unique(true)
                .sparse(sparse)
                .name(name.to_string())
                .build()
        };

        let indexes = [
            IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(unique(EMAIL_INDEX, false))
                .build(),
            IndexModel::builder()
                .keys(doc! { "username": 1 })
                .options(unique(USERNAME_INDEX, true))
                .build(),
            IndexModel::builder()
                .keys(doc! { "google_subject_id": 1 })
                .options(unique(GOOGLE_SUBJECT_INDEX, true))
                .build(),
            IndexModel::builder()
                .keys(doc! { "github_user_id": 1 })
                .options(unique(GITHUB_USER_INDEX, true))
                .build(),
        ];

        self.collection()
            .create_indexes(indexes)
            .await
            .map_err(storage_error)?;

        info!("✅ accounts 인덱스 준비 완료");
        Ok(())
    }

    /// 한 계정의 필드를 `$set`으로 원자적으로 갱신하고 갱신된 문서를 반환합니다.
    async fn set_fields(&self, account_id: i64, mut fields: Document) -> AppResult<Account> {
        fields.insert("updated_at", DateTime::now());
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "_id": account_id }, doc! { "$set": fields })
            .with_options(options)
            .await
            .map_err(map_write_error)?
            .ok_or_else(|| AppError::NotFound(format!("account {}", account_id)))
    }
}

#[async_trait]
impl AccountStore for AccountRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Account>> {
        self.find_one(doc! { "_id": id }).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        self.find_one(doc! { "email": email }).await
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        self.find_one(doc! { "username": username }).await
    }

    async fn find_by_provider_id(&self, provider: AuthProvider, provider_user_id: &str) -> AppResult<Option<Account>> {
        self.find_one(doc! { provider_field(provider): provider_user_id }).await
    }

    async fn create(&self, account: NewAccount) -> AppResult<Account> {
        let id = self.next_account_id().await?;
        let account = account.into_account(id);

        self.collection()
            .insert_one(&account)
            .await
            .map_err(map_write_error)?;

        debug!("계정 생성: id={}", account.id);
        Ok(account)
    }

    async fn link_provider(&self, account_id: i64, provider: AuthProvider, provider_user_id: &str) -> AppResult<Account> {
        self.set_fields(account_id, doc! { provider_field(provider): provider_user_id }).await
    }

    async fn set_password_digest(&self, account_id: i64, password_digest: &str) -> AppResult<Account> {
        self.set_fields(account_id, doc! { "password_digest": password_digest }).await
    }

    async fn set_username(&self, account_id: i64, username: &str) -> AppResult<Account> {
        self.set_fields(account_id, doc! { "username": username }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::error::WriteError;
    use crate::repositories::accounts::{EMAIL_TAKEN, USERNAME_TAKEN};

    #[test]
    fn test_provider_fields() {
        assert_eq!(provider_field(AuthProvider::Google), "google_subject_id");
        assert_eq!(provider_field(AuthProvider::GitHub), "github_user_id");
    }

    fn write_error(code: i32, message: &str) -> MongoError {
        let write_error: WriteError = serde_json::from_value(serde_json::json!({
            "code": code,
            "errmsg": message,
        }))
        .unwrap();
        MongoError::from(ErrorKind::Write(WriteFailure::WriteError(write_error)))
    }

    #[test]
    fn test_duplicate_key_becomes_conflict_named_by_index() {
        let err = write_error(
            11000,
            "E11000 duplicate key error collection: identity_backend.accounts index: email_unique dup key: { email: \"a@b.com\" }",
        );

        assert_eq!(map_write_error(err), AppError::ConflictError(EMAIL_TAKEN.to_string()));

        let err = write_error(
            11000,
            "E11000 duplicate key error collection: identity_backend.accounts index: username_unique dup key: { username: \"emailer\" }",
        );
        assert_eq!(map_write_error(err), AppError::ConflictError(USERNAME_TAKEN.to_string()));
    }

    #[test]
    fn test_other_write_errors_are_storage_failures() {
        let err = write_error(121, "Document failed validation");

        assert!(duplicate_key_detail(&err).is_none());
        assert!(matches!(map_write_error(err), AppError::StorageError(_)));
    }
}
