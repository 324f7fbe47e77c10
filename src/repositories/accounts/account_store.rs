//! 계정 저장소 추상화
//!
//! 서비스 계층은 이 trait만 의존하며, 운영에서는 MongoDB 구현이,
//! 테스트에서는 메모리 구현이 주입됩니다.

use async_trait::async_trait;
use crate::config::AuthProvider;
use crate::domain::entities::accounts::{Account, NewAccount};
use crate::errors::AppResult;

/// 유니크 제약 위반 시 클라이언트에 전달되는 메시지
pub const EMAIL_TAKEN: &str = "Email already registered";
pub const USERNAME_TAKEN: &str = "Username already taken";
pub const PROVIDER_ID_TAKEN: &str = "This provider account is already linked to another user";

pub const ACCOUNT_TAKEN: &str = "Account already exists";

/// 유니크 인덱스 이름
pub const EMAIL_INDEX: &str = "email_unique";
pub const USERNAME_INDEX: &str = "username_unique";
pub const GOOGLE_SUBJECT_INDEX: &str = "google_subject_id_unique";
pub const GITHUB_USER_INDEX: &str = "github_user_id_unique";

/// 중복 키 에러 메시지에서 위반된 인덱스 이름을 꺼냅니다.
///
/// `E11000 duplicate key error collection: db.accounts index: email_unique dup key: { ... }`
pub fn violated_index(detail: &str) -> Option<&str> {
    let (_, rest) = detail.split_once(" index: ")?;
    rest.split_whitespace().next()
}

/// 위반된 유니크 인덱스에 맞는 충돌 메시지를 고릅니다.
pub fn conflict_message_for_index(index: &str) -> &'static str {
    match index {
        EMAIL_INDEX => EMAIL_TAKEN,
        USERNAME_INDEX => USERNAME_TAKEN,
        GOOGLE_SUBJECT_INDEX | GITHUB_USER_INDEX => PROVIDER_ID_TAKEN,
        _ => ACCOUNT_TAKEN,
    }
}

/// 드라이버의 중복 키 메시지를 클라이언트용 충돌 메시지로 바꿉니다.
pub fn conflict_message(detail: &str) -> &'static str {
    violated_index(detail)
        .map(conflict_message_for_index)
        .unwrap_or(ACCOUNT_TAKEN)
}

/// 계정 레코드 접근 인터페이스
///
/// 모든 쓰기는 단일 문서 단위로 원자적이며, 실패하면 아무 변경도 남기지 않습니다.
/// 이메일/사용자명/프로바이더 ID 유니크 제약은 저장소 수준에서 강제되고
/// 위반 시 `ConflictError`로 보고됩니다.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Account>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>>;

    async fn find_by_provider_id(&self, provider: AuthProvider, provider_user_id: &str) -> AppResult<Option<Account>>;

    /// 새 ID를 부여해 계정을 저장합니다.
    async fn create(&self, account: NewAccount) -> AppResult<Account>;

    /// 기존 계정에 프로바이더 ID를 설정하고 갱신된 계정을 반환합니다.
    ///
    /// 다른 필드(비밀번호 해시, 다른 프로바이더 바인딩)는 변경하지 않습니다.
    async fn link_provider(&self, account_id: i64, provider: AuthProvider, provider_user_id: &str) -> AppResult<Account>;

    /// 비밀번호 다이제스트를 설정(또는 교체)합니다.
    async fn set_password_digest(&self, account_id: i64, password_digest: &str) -> AppResult<Account>;

    /// 사용자명을 변경합니다. 다른 계정이 쓰는 이름이면 `ConflictError`입니다.
    async fn set_username(&self, account_id: i64, username: &str) -> AppResult<Account>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_message_for_index_names() {
        assert_eq!(conflict_message_for_index("email_unique"), EMAIL_TAKEN);
        assert_eq!(conflict_message_for_index("username_unique"), USERNAME_TAKEN);
        assert_eq!(conflict_message_for_index("google_subject_id_unique"), PROVIDER_ID_TAKEN);
        assert_eq!(conflict_message_for_index("github_user_id_unique"), PROVIDER_ID_TAKEN);
        assert_eq!(conflict_message_for_index("_id_"), ACCOUNT_TAKEN);
    }

    #[test]
    fn test_only_the_index_token_decides_the_message() {
        let username_with_email_in_it = "E11000 duplicate key error collection: identity_backend.accounts \
            index: username_unique dup key: { username: \"emailer\" }";
        assert_eq!(violated_index(username_with_email_in_it), Some("username_unique"));
        assert_eq!(conflict_message(username_with_email_in_it), USERNAME_TAKEN);

        let database_named_after_email = "E11000 duplicate key error collection: email_service.accounts \
            index: github_user_id_unique dup key: { github_user_id: \"42\" }";
        assert_eq!(conflict_message(database_named_after_email), PROVIDER_ID_TAKEN);

        assert_eq!(violated_index("duplicate key"), None);
        assert_eq!(conflict_message("duplicate key on email"), ACCOUNT_TAKEN);
    }
}
